//! # Collab Relay WebSocket Handler
//!
//! `/ws/collab` 엔드포인트입니다. 소켓마다 reader 태스크와 outbound 펌프
//! 태스크가 하나씩 돌고, 룸 멤버십은 [`RoomRegistry`]가 보관합니다.
//!
//! 릴레이 규칙:
//! - `join-session`: JWT 검증 → 룸 등록 → 세션 문서에 참가자 추가 →
//!   본인에게 `session-joined`, 다른 멤버에게 `peer-joined` 전송
//! - 나머지 다섯 이벤트: 수신한 원본 텍스트를 같은 룸의 다른 소켓에
//!   그대로 재전송. `chat-message`는 추가로 세션 채팅 기록에 남긴다.
//! - 연결 종료: 룸 멤버십 제거 외의 정리는 없다.

use std::collections::HashSet;

use actix_web::{web, HttpRequest, HttpResponse};
use actix_ws::Message;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use uuid::Uuid;

use crate::collab::events::{ClientEvent, ServerEvent};
use crate::collab::registry::{ConnectionId, RoomRegistry};
use crate::core::registry::ServiceLocator;
use crate::services::auth::TokenService;
use crate::services::collab::SessionService;

/// 연결별 릴레이 상태
struct ConnState {
    conn_id: ConnectionId,
    outbound: UnboundedSender<String>,
    /// 첫 join 성공 시 확정되는 인증 정보
    user_id: Option<String>,
    display_name: Option<String>,
    /// 이 연결이 등록된 룸(세션 코드) 목록
    rooms: HashSet<String>,
}

/// WebSocket 업그레이드 핸들러
///
/// `GET /ws/collab`
pub async fn collab_ws(
    req: HttpRequest,
    body: web::Payload,
) -> actix_web::Result<HttpResponse> {
    let (response, session, msg_stream) = actix_ws::handle(&req, body)?;

    let conn_id = Uuid::new_v4();
    let (tx, mut rx) = unbounded_channel::<String>();

    log::info!("협업 소켓 연결: {}", conn_id);

    // outbound 펌프: 룸 브로드캐스트가 넣은 텍스트를 소켓으로 내보낸다
    let mut pump_session = session.clone();
    actix_web::rt::spawn(async move {
        while let Some(text) = rx.recv().await {
            if pump_session.text(text).await.is_err() {
                break;
            }
        }
    });

    actix_web::rt::spawn(relay_loop(conn_id, tx, session, msg_stream));

    Ok(response)
}

/// 소켓 reader 루프. 종료 시 룸 멤버십을 정리한다.
async fn relay_loop(
    conn_id: ConnectionId,
    outbound: UnboundedSender<String>,
    mut session: actix_ws::Session,
    mut msg_stream: actix_ws::MessageStream,
) {
    let mut state = ConnState {
        conn_id,
        outbound,
        user_id: None,
        display_name: None,
        rooms: HashSet::new(),
    };

    while let Some(Ok(msg)) = msg_stream.recv().await {
        match msg {
            Message::Text(text) => {
                handle_text_frame(&mut state, text.to_string()).await;
            }
            Message::Ping(bytes) => {
                if session.pong(&bytes).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => {
                break;
            }
            _ => {
                // Binary, Pong 등은 무시
            }
        }
    }

    // 룸 멤버십 정리. 그 외의 정리는 하지 않는다.
    let registry = ServiceLocator::get::<RoomRegistry>();
    for room in &state.rooms {
        registry.leave(room, &state.conn_id);
    }

    log::info!("협업 소켓 종료: {} (룸 {}개 정리)", state.conn_id, state.rooms.len());
}

/// 텍스트 프레임 하나를 처리합니다.
async fn handle_text_frame(state: &mut ConnState, raw: String) {
    let event = match serde_json::from_str::<ClientEvent>(&raw) {
        Ok(event) => event,
        Err(e) => {
            log::warn!("릴레이 메시지 파싱 실패: {}", e);
            send_error(state, "잘못된 메시지 형식입니다");
            return;
        }
    };

    if event.is_join() {
        handle_join(state, event).await;
        return;
    }

    let session_code = event.session_code().to_string();

    // join하지 않은 룸으로의 이벤트는 거부한다
    if !state.rooms.contains(&session_code) {
        send_error(state, "먼저 join-session으로 세션에 참가해주세요");
        return;
    }

    // chat-message는 세션 문서에도 남긴다. 기록 실패가 릴레이를 막지는 않는다.
    if let ClientEvent::ChatMessage { ref payload, .. } = event {
        persist_chat(state, &session_code, payload).await;
    }

    let registry = ServiceLocator::get::<RoomRegistry>();
    let delivered = registry.broadcast_except(&session_code, &state.conn_id, &raw);
    log::debug!("릴레이 전달: 룸 {} → {}명", session_code, delivered);
}

/// `join-session` 처리: 토큰 검증 → 룸 등록 → 참가자 영속화 → 알림
async fn handle_join(state: &mut ConnState, event: ClientEvent) {
    let ClientEvent::JoinSession { session_code, access_token } = event else {
        return;
    };

    // 1. JWT 검증
    let token_service = TokenService::instance();
    let claims = match token_service.verify_token(&access_token) {
        Ok(claims) => claims,
        Err(e) => {
            log::warn!("릴레이 join 인증 실패: {}", e);
            send_error(state, "유효하지 않은 인증 토큰입니다");
            return;
        }
    };

    // 2. 룸 등록 (정원 검사 포함)
    let registry = ServiceLocator::get::<RoomRegistry>();
    if let Err(e) = registry.join(&session_code, state.conn_id, state.outbound.clone()) {
        send_error(state, &e.to_string());
        return;
    }

    // 3. 세션 문서에 참가자 추가 (멱등)
    let session_service = SessionService::instance();
    let session = match session_service.join_session(&session_code, &claims.sub).await {
        Ok(session) => session,
        Err(e) => {
            registry.leave(&session_code, &state.conn_id);
            log::warn!("세션 참가 실패: {} - {}", session_code, e);
            send_error(state, &e.to_string());
            return;
        }
    };

    let display_name = session
        .participants
        .iter()
        .find(|p| p.user_id == claims.sub)
        .map(|p| p.display_name.clone())
        .unwrap_or_else(|| "참가자".to_string());

    state.user_id = Some(claims.sub.clone());
    state.display_name = Some(display_name.clone());
    state.rooms.insert(session_code.clone());

    log::info!("세션 참가: {} ← 사용자 {}", session_code, claims.sub);

    // 4. 본인 ack + 다른 멤버 알림
    let ack = ServerEvent::SessionJoined {
        session_code: session_code.clone(),
        participant_count: registry.member_count(&session_code),
    };
    let _ = state.outbound.send(ack.to_json());

    let notice = ServerEvent::PeerJoined {
        session_code: session_code.clone(),
        user_id: claims.sub,
        display_name,
    };
    registry.broadcast_except(&session_code, &state.conn_id, &notice.to_json());
}

/// chat-message payload를 세션 채팅 기록으로 영속화합니다.
async fn persist_chat(state: &ConnState, session_code: &str, payload: &serde_json::Value) {
    let (Some(user_id), Some(display_name)) = (&state.user_id, &state.display_name) else {
        return;
    };

    let body = payload
        .get("body")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| payload.to_string());

    let session_service = SessionService::instance();
    if let Err(e) = session_service
        .append_user_chat(session_code, user_id, display_name, body)
        .await
    {
        log::warn!("채팅 기록 저장 실패: {} - {}", session_code, e);
    }
}

fn send_error(state: &ConnState, message: &str) {
    let event = ServerEvent::Error {
        message: message.to_string(),
    };
    let _ = state.outbound.send(event.to_json());
}
