//! # Book Client
//!
//! Provides a high-level API for the book grid and the add-book form.
//! It wraps a `SyncClient<Book>` and exposes domain-specific methods.
use crate::book_actor::BookError;
use crate::clients::collection_client::CollectionClient;
use crate::framework::{FrameworkError, Row, Snapshot, SyncClient, SyncState};
use crate::grid::GridQuery;
use crate::model::Book;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Book synchronizer.
#[derive(Clone)]
pub struct BookClient {
    inner: SyncClient<Book>,
}

impl BookClient {
    pub fn new(inner: SyncClient<Book>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CollectionClient<Book> for BookClient {
    type Error = BookError;

    fn inner(&self) -> &SyncClient<Book> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Network(failure) => BookError::StoreUnavailable(failure.to_string()),
            other => BookError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl BookClient {
    /// Submit the add-book form. No field is validated; blank books are accepted.
    ///
    /// The store assigns the new id, which shows up in the returned rows.
    #[instrument(skip(self))]
    pub async fn add_book(&self, book: Book) -> Result<Snapshot<Book>, BookError> {
        debug!("Sending request");
        self.inner.create(book).await.map_err(Self::map_error)
    }

    /// The current rows, filtered and sorted for display.
    pub fn grid(&self, query: &GridQuery) -> Vec<Row<Book>> {
        let rows = self.rows();
        query.apply(&rows).into_iter().cloned().collect()
    }

    pub fn state(&self) -> SyncState {
        self.inner.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{
        create_mock_client, expect_create, expect_delete, snapshot_of, MockClient,
    };
    use crate::framework::NetworkFailure;
    use crate::grid::{ColumnFilter, SortDirection, SortKey};
    use crate::model::Column;

    fn book(title: &str, year: &str) -> Book {
        Book::new(title, "Someone", year, "", "")
    }

    #[tokio::test]
    async fn test_add_book_forwards_record_unvalidated() {
        let (client, mut receiver) = create_mock_client::<Book>(10);
        let book_client = BookClient::new(client);

        let add_task = tokio::spawn(async move { book_client.add_book(Book::default()).await });

        let (record, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(record, Book::default());
        responder.send(Ok(snapshot_of([("k1", record)]))).unwrap();

        let rows = add_task.await.unwrap().unwrap();
        assert!(rows.contains("k1"));
    }

    #[tokio::test]
    async fn test_delete_sends_id() {
        let (client, mut receiver) = create_mock_client::<Book>(10);
        let book_client = BookClient::new(client);

        let delete_task =
            tokio::spawn(async move { book_client.delete("missing".to_string()).await });

        let (id, responder) = expect_delete(&mut receiver)
            .await
            .expect("Expected Delete request");
        assert_eq!(id, "missing");
        responder
            .send(Ok(snapshot_of(Vec::<(String, Book)>::new())))
            .unwrap();

        assert!(delete_task.await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_maps_to_store_unavailable() {
        let mut mock = MockClient::<Book>::new();
        mock.expect_refresh().return_err(FrameworkError::Network(NetworkFailure::Status {
            status: 503,
            url: "http://store/books.json".to_string(),
        }));
        let book_client = BookClient::new(mock.client());

        let err = book_client.refresh().await.unwrap_err();
        assert!(matches!(err, BookError::StoreUnavailable(msg) if msg.contains("503")));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_communication_error() {
        let (client, receiver) = create_mock_client::<Book>(1);
        drop(receiver);
        let book_client = BookClient::new(client);

        let err = book_client.add_book(Book::default()).await.unwrap_err();
        assert_eq!(
            err,
            BookError::ActorCommunicationError("Actor closed".to_string())
        );
    }

    #[tokio::test]
    async fn test_grid_reads_latest_snapshot() {
        let mut mock = MockClient::<Book>::new();
        mock.expect_refresh().return_ok(snapshot_of([
            ("k1", book("Dune", "1965")),
            ("k2", book("Emma", "1815")),
            ("k3", book("Dracula", "1897")),
        ]));
        let book_client = BookClient::new(mock.client());
        book_client.refresh().await.unwrap();

        let query = GridQuery {
            sort: Some(SortKey {
                column: Column::Year,
                direction: SortDirection::Ascending,
            }),
            filters: vec![ColumnFilter::new(Column::Title, "d")],
        };
        let ids: Vec<_> = book_client
            .grid(&query)
            .into_iter()
            .map(|row| row.id)
            .collect();
        assert_eq!(ids, vec!["k3", "k1"]);
        mock.verify();
    }
}
