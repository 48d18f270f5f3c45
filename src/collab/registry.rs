//! 룸 레지스트리
//!
//! 릴레이의 유일한 공유 상태인 소켓-룸 멤버십 테이블입니다.
//! 룸 이름(세션 코드) → 연결 ID → 송신 채널 매핑을 보관하며,
//! 브로드캐스트는 송신자를 제외한 모든 멤버의 채널에 텍스트를 넣습니다.
//!
//! Database, RedisClient와 같은 인프라 컴포넌트로 취급되어
//! 부트스트랩에서 `ServiceLocator::set()`으로 등록됩니다.

use std::collections::HashMap;
use std::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;
use crate::core::errors::AppError;

/// 소켓 연결 식별자
pub type ConnectionId = Uuid;

/// 연결별 송신 채널. 수신 측 태스크가 WebSocket 세션으로 펌프한다.
pub type OutboundSender = UnboundedSender<String>;

/// 룸 멤버십 레지스트리
///
/// 락은 멤버십 테이블 접근 동안만 잡으며, 실제 소켓 전송은
/// 채널 너머의 펌프 태스크에서 일어나므로 락 안에서 await하지 않습니다.
pub struct RoomRegistry {
    rooms: RwLock<HashMap<String, HashMap<ConnectionId, OutboundSender>>>,
    /// 룸당 최대 동시 접속 수
    max_participants: usize,
}

impl RoomRegistry {
    pub fn new(max_participants: usize) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            max_participants,
        }
    }

    /// 연결을 룸에 등록하고 등록 후 인원 수를 반환합니다.
    ///
    /// 정원이 가득 찼으면 `ConflictError`를 반환합니다.
    /// 같은 연결의 중복 join은 송신 채널만 교체합니다.
    pub fn join(&self, room: &str, conn_id: ConnectionId, sender: OutboundSender) -> Result<usize, AppError> {
        let mut rooms = self.rooms.write().unwrap();
        let members = rooms.entry(room.to_string()).or_default();

        if !members.contains_key(&conn_id) && members.len() >= self.max_participants {
            return Err(AppError::ConflictError(
                format!("세션 정원({})이 가득 찼습니다", self.max_participants)
            ));
        }

        members.insert(conn_id, sender);
        Ok(members.len())
    }

    /// 연결을 룸에서 제거합니다. 마지막 멤버가 나가면 룸 엔트리도 제거합니다.
    pub fn leave(&self, room: &str, conn_id: &ConnectionId) {
        let mut rooms = self.rooms.write().unwrap();

        if let Some(members) = rooms.get_mut(room) {
            members.remove(conn_id);
            if members.is_empty() {
                rooms.remove(room);
            }
        }
    }

    /// 송신자를 제외한 룸의 모든 멤버에게 텍스트를 전달합니다.
    ///
    /// 전달에 성공한 멤버 수를 반환합니다. 닫힌 채널(끊긴 연결)은
    /// 조용히 건너뜁니다. 연결 정리는 해당 소켓의 reader 태스크 몫입니다.
    pub fn broadcast_except(&self, room: &str, sender_id: &ConnectionId, text: &str) -> usize {
        let rooms = self.rooms.read().unwrap();

        let Some(members) = rooms.get(room) else {
            return 0;
        };

        let mut delivered = 0;
        for (conn_id, sender) in members.iter() {
            if conn_id == sender_id {
                continue;
            }
            if sender.send(text.to_string()).is_ok() {
                delivered += 1;
            }
        }

        delivered
    }

    /// 룸의 현재 인원 수
    pub fn member_count(&self, room: &str) -> usize {
        self.rooms
            .read()
            .unwrap()
            .get(room)
            .map(|members| members.len())
            .unwrap_or(0)
    }

    /// 연결이 룸에 등록되어 있는지 확인
    pub fn is_member(&self, room: &str, conn_id: &ConnectionId) -> bool {
        self.rooms
            .read()
            .unwrap()
            .get(room)
            .map(|members| members.contains_key(conn_id))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    fn registry() -> RoomRegistry {
        RoomRegistry::new(3)
    }

    #[test]
    fn test_join_and_member_count() {
        let registry = registry();
        let (tx, _rx) = unbounded_channel();
        let conn = Uuid::new_v4();

        assert_eq!(registry.join("room-a", conn, tx).unwrap(), 1);
        assert_eq!(registry.member_count("room-a"), 1);
        assert!(registry.is_member("room-a", &conn));
        assert_eq!(registry.member_count("room-b"), 0);
    }

    #[test]
    fn test_broadcast_skips_sender() {
        let registry = registry();
        let (tx_a, mut rx_a) = unbounded_channel();
        let (tx_b, mut rx_b) = unbounded_channel();
        let conn_a = Uuid::new_v4();
        let conn_b = Uuid::new_v4();

        registry.join("room-a", conn_a, tx_a).unwrap();
        registry.join("room-a", conn_b, tx_b).unwrap();

        let delivered = registry.broadcast_except("room-a", &conn_a, "{\"event\":\"code-change\"}");

        assert_eq!(delivered, 1);
        assert!(rx_a.try_recv().is_err());
        assert_eq!(rx_b.try_recv().unwrap(), "{\"event\":\"code-change\"}");
    }

    #[test]
    fn test_broadcast_does_not_cross_rooms() {
        let registry = registry();
        let (tx_a, _rx_a) = unbounded_channel();
        let (tx_b, mut rx_b) = unbounded_channel();
        let conn_a = Uuid::new_v4();
        let conn_b = Uuid::new_v4();

        registry.join("room-a", conn_a, tx_a).unwrap();
        registry.join("room-b", conn_b, tx_b).unwrap();

        let delivered = registry.broadcast_except("room-a", &conn_a, "hello");

        assert_eq!(delivered, 0);
        assert!(rx_b.try_recv().is_err());
    }

    #[test]
    fn test_room_capacity_limit() {
        let registry = registry();

        for _ in 0..3 {
            let (tx, _rx) = unbounded_channel();
            registry.join("room-a", Uuid::new_v4(), tx).unwrap();
        }

        let (tx, _rx) = unbounded_channel();
        let result = registry.join("room-a", Uuid::new_v4(), tx);
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[test]
    fn test_leave_removes_member_and_empty_room() {
        let registry = registry();
        let (tx_a, _rx_a) = unbounded_channel();
        let (tx_b, _rx_b) = unbounded_channel();
        let conn_a = Uuid::new_v4();
        let conn_b = Uuid::new_v4();

        registry.join("room-a", conn_a, tx_a).unwrap();
        registry.join("room-a", conn_b, tx_b).unwrap();

        registry.leave("room-a", &conn_a);
        assert_eq!(registry.member_count("room-a"), 1);
        assert!(!registry.is_member("room-a", &conn_a));

        registry.leave("room-a", &conn_b);
        assert_eq!(registry.member_count("room-a"), 0);

        // 빈 룸이 제거된 뒤에도 재입장이 가능해야 한다
        let (tx_c, _rx_c) = unbounded_channel();
        assert_eq!(registry.join("room-a", Uuid::new_v4(), tx_c).unwrap(), 1);
    }

    #[test]
    fn test_rejoin_replaces_sender_without_duplicate() {
        let registry = registry();
        let conn = Uuid::new_v4();

        let (tx_old, _rx_old) = unbounded_channel();
        registry.join("room-a", conn, tx_old).unwrap();

        let (tx_new, mut rx_new) = unbounded_channel();
        assert_eq!(registry.join("room-a", conn, tx_new).unwrap(), 1);

        // 교체된 채널이 사용된다
        let (tx_other, _rx_other) = unbounded_channel();
        let other = Uuid::new_v4();
        registry.join("room-a", other, tx_other).unwrap();
        registry.broadcast_except("room-a", &other, "ping");
        assert_eq!(rx_new.try_recv().unwrap(), "ping");
    }
}
