//! 웹사이트 빌더 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::websites::website::Page;

/// 웹사이트 생성 요청
///
/// 슬러그는 클라이언트가 직접 지정하지 않고 제목에서 파생됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWebsiteRequest {
    #[validate(length(min = 1, max = 100, message = "제목은 1-100자 사이여야 합니다"))]
    pub title: String,

    #[validate(length(max = 500, message = "설명은 500자를 넘을 수 없습니다"))]
    pub description: Option<String>,

    pub theme: Option<String>,
}

/// 웹사이트 메타데이터/페이지 수정 요청
///
/// 모든 필드가 선택적이며, 전달된 필드만 `$set` 됩니다.
/// `pages`가 전달되면 빌더가 보낸 전체 페이지 트리로 교체됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateWebsiteRequest {
    #[validate(length(min = 1, max = 100, message = "제목은 1-100자 사이여야 합니다"))]
    pub title: Option<String>,

    #[validate(length(max = 500, message = "설명은 500자를 넘을 수 없습니다"))]
    pub description: Option<String>,

    pub theme: Option<String>,

    pub pages: Option<Vec<Page>>,
}

/// 공개 상태 변경 요청
#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub published: bool,
}
