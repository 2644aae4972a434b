use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::{Stream, StreamExt, TryStreamExt};
use tokio::fs::File;
use tokio_util::compat::TokioAsyncReadCompatExt;

use super::error::IoError;
use super::parse::RawUserRow;
use crate::domain::UserRecord;

/// Async stream of user records from CSV input, one per row
pub struct CsvUserStream {
    inner: Pin<Box<dyn Stream<Item = Result<UserRecord, IoError>> + Send>>,
}

impl CsvUserStream {
    /// Create a new user stream from an async reader
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let csv_reader = AsyncReaderBuilder::new()
            .trim(csv_async::Trim::All)
            .flexible(true)
            .create_deserializer(reader);

        let stream = csv_reader
            .into_deserialize::<RawUserRow>()
            .map(|result| result.map_err(IoError::from).and_then(RawUserRow::parse));

        Self {
            inner: Box::pin(stream),
        }
    }

    /// Create a new user stream from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let users = CsvUserStream::from_file("users.csv").await?.read_all().await?;
    /// ```
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path.as_ref()).await?;
        Ok(Self::new(file.compat()))
    }

    /// Collect every row, stopping at the first unreadable one
    pub async fn read_all(self) -> Result<Vec<UserRecord>, IoError> {
        self.try_collect().await
    }
}

impl Stream for CsvUserStream {
    type Item = Result<UserRecord, IoError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use futures::io::Cursor;

    #[tokio::test]
    async fn reads_valid_csv_stream() {
        let csv_data = "\
username,email,password,phone
alice,Alice@Example.com,password1,5550100
bob,bob@example.com,password2,5550101
";
        let reader = Cursor::new(csv_data.as_bytes());
        let mut stream = CsvUserStream::new(reader);

        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first.username, "alice");
        assert_eq!(first.email, "alice@example.com");
        assert_eq!(first.role, Role::User);

        let second = stream.next().await.unwrap().unwrap();
        assert_eq!(second.username, "bob");

        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn handles_whitespace_and_column_order() {
        let csv_data = "\
phone , role , username , password , email
  5550100  ,  admin , carol ,  password3 , carol@example.com
";
        let users = CsvUserStream::new(Cursor::new(csv_data.as_bytes()))
            .read_all()
            .await
            .unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "carol");
        assert_eq!(users[0].phone, "5550100");
        assert_eq!(users[0].role, Role::Admin);
    }

    #[tokio::test]
    async fn missing_cells_are_left_for_validation() {
        let csv_data = "\
username,email,password,phone
dave,dave@example.com,password4,
";
        let users = CsvUserStream::new(Cursor::new(csv_data.as_bytes()))
            .read_all()
            .await
            .unwrap();

        assert_eq!(users[0].phone, "");
    }

    #[tokio::test]
    async fn invalid_role_stops_reading() {
        let csv_data = "\
username,email,password,phone,role
erin,erin@example.com,password5,5550104,owner
";
        let result = CsvUserStream::new(Cursor::new(csv_data.as_bytes()))
            .read_all()
            .await;

        assert!(matches!(result, Err(IoError::Domain(_))));
    }

    #[tokio::test]
    async fn handles_empty_csv() {
        let csv_data = "username,email,password,phone\n";
        let users = CsvUserStream::new(Cursor::new(csv_data.as_bytes()))
            .read_all()
            .await
            .unwrap();

        assert!(users.is_empty());
    }
}
