use std::time::Duration;

use futures::future::try_join_all;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::{
    Categories, CatalogEntry, CatalogRecord, Collection, Edit, Photo, Profile, Video,
    FEATURED_EDIT_ENDPOINT,
};
use crate::config::Config;
use crate::error::FolioError;
use crate::media::{resolve_all, AssetReference};

/// Read-only client for the portfolio's public endpoints
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    api_origin: String,
    thumbnail_size: u32,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Result<Self, FolioError> {
        let client = Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_origin: config.api_origin.trim_end_matches('/').to_owned(),
            thumbnail_size: config.thumbnail_size,
        })
    }

    /// Override the configured thumbnail width
    pub fn with_thumbnail_size(mut self, size: u32) -> Self {
        self.thumbnail_size = size;
        self
    }

    pub fn thumbnail_size(&self) -> u32 {
        self.thumbnail_size
    }

    pub fn api_origin(&self) -> &str {
        &self.api_origin
    }

    pub async fn photos(&self, category: Option<&str>) -> Result<Vec<Photo>, FolioError> {
        self.list(Collection::Photos, category).await
    }

    pub async fn videos(&self, category: Option<&str>) -> Result<Vec<Video>, FolioError> {
        self.list(Collection::Videos, category).await
    }

    pub async fn edits(&self, category: Option<&str>) -> Result<Vec<Edit>, FolioError> {
        self.list(Collection::Edits, category).await
    }

    pub async fn profile(&self) -> Result<Profile, FolioError> {
        self.get(Collection::Profile.endpoint(), &[]).await
    }

    pub async fn categories(&self, collection: Collection) -> Result<Vec<String>, FolioError> {
        match collection.categories_endpoint() {
            Some(endpoint) => {
                let categories: Categories = self.get(endpoint, &[]).await?;
                Ok(categories.categories)
            }
            None => Ok(Vec::new()),
        }
    }

    /// The highlighted edit, if one is marked as featured
    pub async fn featured_edit(&self) -> Result<Option<Edit>, FolioError> {
        self.get_optional(FEATURED_EDIT_ENDPOINT).await
    }

    /// Fetch a collection and resolve every asset in it
    pub async fn entries(
        &self,
        collection: Collection,
        category: Option<&str>,
    ) -> Result<Vec<CatalogEntry>, FolioError> {
        Ok(match collection {
            Collection::Photos => self.resolve_records(&self.photos(category).await?),
            Collection::Videos => self.resolve_records(&self.videos(category).await?),
            Collection::Edits => self.resolve_records(&self.edits(category).await?),
            Collection::Profile => self.resolve_records(&[self.profile().await?]),
        })
    }

    /// Resolve every titled asset of already fetched records
    pub fn resolve_records<R>(&self, records: &[R]) -> Vec<CatalogEntry>
    where
        R: CatalogRecord,
    {
        records
            .iter()
            .flat_map(|r| r.titled_assets())
            .map(|(title, asset)| self.entry(title, &asset))
            .collect()
    }

    /// Fetch several collections concurrently, keeping their order
    pub async fn entries_for(
        &self,
        collections: &[Collection],
        category: Option<&str>,
    ) -> Result<Vec<(Collection, Vec<CatalogEntry>)>, FolioError> {
        try_join_all(collections.iter().map(|&collection| async move {
            let entries = self.entries(collection, category).await?;
            Ok::<_, FolioError>((collection, entries))
        }))
        .await
    }

    fn entry(&self, title: String, asset: &AssetReference) -> CatalogEntry {
        let media = resolve_all(asset, self.thumbnail_size, &self.api_origin);
        if media.thumbnail.is_none() {
            debug!("No thumbnail for {:?}", title);
        }
        CatalogEntry { title, media }
    }

    async fn list<T>(
        &self,
        collection: Collection,
        category: Option<&str>,
    ) -> Result<Vec<T>, FolioError>
    where
        T: DeserializeOwned,
    {
        let mut query = vec![("published_only", "true")];
        if let Some(category) = category {
            query.push(("category", category));
        }
        let items: Vec<T> = self.get(collection.endpoint(), &query).await?;
        info!("Fetched {} records from {}", items.len(), collection.endpoint());
        Ok(items)
    }

    async fn get<T>(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<T, FolioError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(endpoint, query).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::Status(status.as_u16(), endpoint.to_owned()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Like `get`, but a 404 means the record does not exist
    async fn get_optional<T>(&self, endpoint: &str) -> Result<Option<T>, FolioError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(endpoint, &[]).await?;
        if is_missing(response.status(), endpoint)? {
            debug!("{} not found", endpoint);
            return Ok(None);
        }
        let body = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&body)?))
    }

    async fn send(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Response, FolioError> {
        let url = format!("{}{}", self.api_origin, endpoint);
        debug!("GET {}", url);
        Ok(self.client.get(&url).query(query).send().await?)
    }
}

/// `Ok(true)` for a 404, `Ok(false)` for success, an error for anything else
fn is_missing(status: StatusCode, endpoint: &str) -> Result<bool, FolioError> {
    if status == StatusCode::NOT_FOUND {
        Ok(true)
    } else if status.is_success() {
        Ok(false)
    } else {
        Err(FolioError::Status(status.as_u16(), endpoint.to_owned()))
    }
}
