use super::{
    entity::{DocumentEntity, ListDocumentsEntity, TicketInsertEntity},
    NewTicket, TicketsRepository, TicketsRepositoryConfig,
};
use crate::repository::{self, Error};
use async_trait::async_trait;
use google_auth::TokenSource;
use reqwest::{Client, RequestBuilder, Response};
use std::sync::Arc;

const USERS: &str = "users";
const TICKETS: &str = "tickets";
const PAGE_SIZE: usize = 300;

pub struct TicketsRepositoryImpl {
    documents_url: String,
    client: Client,
    token_source: Arc<dyn TokenSource>,
}

impl TicketsRepositoryImpl {
    pub fn new(
        config: TicketsRepositoryConfig,
        client: Client,
        token_source: Arc<dyn TokenSource>,
    ) -> Self {
        let documents_url = format!(
            "{}/v1/projects/{}/databases/(default)/documents",
            config.base_url.trim_end_matches('/'),
            config.project_id
        );

        Self {
            documents_url,
            client,
            token_source,
        }
    }

    fn collection_url(&self, user_id: &str) -> String {
        format!("{}/{USERS}/{user_id}/{TICKETS}", self.documents_url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, Error> {
        let token = self.token_source.access_token().await?;
        let response = request.bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Firestore { status, message });
        }

        Ok(response)
    }

    fn document_id(document: DocumentEntity) -> Result<String, Error> {
        match document.id() {
            Some(id) => Ok(id.to_string()),
            None => Err(Error::InvalidDocumentName(document.name)),
        }
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn find_ids(&self, user_id: &str) -> Result<Vec<String>, repository::Error> {
        let url = self.collection_url(user_id);
        let mut ids = Vec::new();
        let mut page_token = None;

        loop {
            let mut request = self.client.get(&url).query(&[("pageSize", PAGE_SIZE)]);
            if let Some(page_token) = &page_token {
                request = request.query(&[("pageToken", page_token)]);
            }

            let page = self
                .send(request)
                .await?
                .json::<ListDocumentsEntity>()
                .await?;
            tracing::debug!(user_id, documents = page.documents.len(), "fetched page");

            for document in page.documents {
                ids.push(Self::document_id(document)?);
            }

            match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(next_page_token) => page_token = Some(next_page_token),
                None => break,
            }
        }

        Ok(ids)
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<(), repository::Error> {
        let url = format!("{}/{id}", self.collection_url(user_id));

        self.send(self.client.delete(url)).await?;
        tracing::debug!(user_id, id, "deleted document");

        Ok(())
    }

    async fn insert(
        &self,
        user_id: &str,
        ticket: &NewTicket,
    ) -> Result<String, repository::Error> {
        let insert_entity = TicketInsertEntity::try_from(ticket)?;

        let document = self
            .send(
                self.client
                    .post(self.collection_url(user_id))
                    .json(&insert_entity),
            )
            .await?
            .json::<DocumentEntity>()
            .await?;

        Self::document_id(document)
    }
}
