//! Website Entity Implementation
//!
//! 드래그 앤 드롭 빌더가 저장하는 웹사이트 문서 모델입니다.
//! 페이지는 순서 있는 콘텐츠 블록 목록이고, 블록의 props는 서버가
//! 해석하지 않는 불투명한 JSON 문서입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 콘텐츠 블록 종류
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Heading,
    Text,
    Image,
    Button,
    Embed,
}

/// 페이지를 구성하는 단일 콘텐츠 블록
///
/// `props`는 프론트엔드 빌더가 소유하는 임의 JSON입니다.
/// 서버는 저장과 반환만 담당합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    pub block_id: String,
    pub kind: BlockKind,
    pub props: serde_json::Value,
}

/// 웹사이트의 단일 페이지
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// 사이트 내 경로 ("/" 또는 "/about" 형태)
    pub path: String,
    pub title: String,
    /// 순서가 의미를 갖는 블록 목록
    pub blocks: Vec<ContentBlock>,
}

/// 웹사이트 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Website {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유자 사용자 ID (hex 문자열)
    pub owner_id: String,
    pub title: String,
    /// 공개 URL 슬러그 (unique)
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 테마 식별자
    pub theme: String,
    pub pages: Vec<Page>,
    /// 공개 여부. 공개된 사이트만 슬러그로 조회할 수 있다.
    pub published: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Website {
    /// 기본 홈 페이지 하나를 가진 새 웹사이트를 생성합니다.
    pub fn new(owner_id: String, title: String, slug: String, description: Option<String>, theme: Option<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            owner_id,
            title: title.clone(),
            slug,
            description,
            theme: theme.unwrap_or_else(|| "default".to_string()),
            pages: vec![Page {
                path: "/".to_string(),
                title,
                blocks: Vec::new(),
            }],
            published: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 해당 사용자가 소유자인지 확인
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_website_starts_unpublished_with_home_page() {
        let site = Website::new(
            "507f1f77bcf86cd799439011".to_string(),
            "포트폴리오".to_string(),
            "portfolio".to_string(),
            None,
            None,
        );

        assert!(!site.published);
        assert_eq!(site.theme, "default");
        assert_eq!(site.pages.len(), 1);
        assert_eq!(site.pages[0].path, "/");
        assert!(site.pages[0].blocks.is_empty());
    }

    #[test]
    fn test_ownership_check() {
        let site = Website::new(
            "owner-1".to_string(),
            "사이트".to_string(),
            "site".to_string(),
            None,
            Some("dark".to_string()),
        );

        assert!(site.is_owned_by("owner-1"));
        assert!(!site.is_owned_by("owner-2"));
        assert_eq!(site.theme, "dark");
    }

    #[test]
    fn test_block_props_are_opaque_json() {
        let block = ContentBlock {
            block_id: "b1".to_string(),
            kind: BlockKind::Image,
            props: serde_json::json!({ "src": "https://cdn.example.com/a.png", "alt": "사진", "custom": { "x": 1 } }),
        };

        let json = serde_json::to_string(&block).unwrap();
        let restored: ContentBlock = serde_json::from_str(&json).unwrap();

        // 서버가 모르는 필드도 그대로 보존되어야 한다
        assert_eq!(restored.props["custom"]["x"], 1);
        assert_eq!(restored.kind, BlockKind::Image);
    }
}
