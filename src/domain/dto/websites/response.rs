//! 웹사이트 빌더 응답 DTO

use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::websites::website::{Page, Website};

/// 웹사이트 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteResponse {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub theme: String,
    pub pages: Vec<Page>,
    pub published: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Website> for WebsiteResponse {
    fn from(site: Website) -> Self {
        Self {
            id: site.id.map(|id| id.to_hex()).unwrap_or_default(),
            owner_id: site.owner_id,
            title: site.title,
            slug: site.slug,
            description: site.description,
            theme: site.theme,
            pages: site.pages,
            published: site.published,
            created_at: site.created_at,
            updated_at: site.updated_at,
        }
    }
}

/// 소유자 목록 조회용 요약 응답 (페이지 본문 제외)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteSummaryResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub theme: String,
    pub published: bool,
    pub page_count: usize,
    pub updated_at: DateTime,
}

impl From<Website> for WebsiteSummaryResponse {
    fn from(site: Website) -> Self {
        Self {
            id: site.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: site.title,
            slug: site.slug,
            theme: site.theme,
            published: site.published,
            page_count: site.pages.len(),
            updated_at: site.updated_at,
        }
    }
}
