//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 워크스페이스 백엔드의 모든 서비스/리포지토리를 관리하는 싱글톤 DI 컨테이너입니다.
//! Spring Framework의 ApplicationContext + BeanFactory에 해당하는 역할을 Rust로 구현했으며,
//! `inventory` 크레이트로 컴파일 타임에 수집된 컴포넌트를 지연 초기화합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring 개념 | 이 시스템 |
//! |-------------|-----------|
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@Service` / `@Repository` | `#[service]` / `#[repository]` |
//! | `@Autowired` | `Arc<T>` 필드 자동 주입 |
//! | `@Lazy` + singleton scope | 기본 동작 |
//! | `registerSingleton()` | `ServiceLocator::set()` |
//!
//! ## 동작 순서
//!
//! 1. **컴파일 타임**: `#[service]`/`#[repository]` 매크로가 등록 정보를 생성하고
//!    `inventory::collect!`가 전역 레지스트리로 수집합니다.
//! 2. **부트스트랩**: `main()`에서 Database, RedisClient, RoomRegistry 같은
//!    인프라 컴포넌트를 `ServiceLocator::set()`으로 직접 등록합니다.
//! 3. **주입**: 컴포넌트의 `Arc<T>` 필드는 생성 시점에 `ServiceLocator::get::<T>()`로
//!    해결되며, 타입당 정확히 하나의 인스턴스가 캐시됩니다.
//!
//! 순환 의존성은 초기화 중인 타입 집합으로 감지하여 즉시 패닉시킵니다.
//! 런타임 늦게 발견되는 것보다 부트스트랩에서 실패하는 편이 낫기 때문입니다.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// `#[service]` 매크로가 적용된 구조체는 이 trait을 자동 구현합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 레지스트리 검색 키로 사용되는 서비스 이름
    fn name(&self) -> &str;

    /// 서비스 생성 직후 호출되는 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
///
/// `#[repository]` 매크로가 적용된 구조체는 이 trait을 자동 구현합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 레지스트리 검색 키로 사용되는 리포지토리 이름
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 인덱스 생성 등 데이터 액세스 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[service]` 매크로가 생성하는 등록 메타데이터
pub struct ServiceRegistration {
    /// 서비스의 고유 이름 (검색 키)
    pub name: &'static str,
    /// 지연 초기화에 사용되는 인스턴스 생성 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// `#[repository]` 매크로가 생성하는 등록 메타데이터
pub struct RepositoryRegistration {
    /// 리포지토리의 고유 이름 (검색 키)
    pub name: &'static str,
    /// 지연 초기화에 사용되는 인스턴스 생성 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

// 컴파일 타임에 모든 등록 정보를 수집한다
inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 서비스 이름 → 등록정보 매핑 캐시. 첫 접근 시 한 번만 구성된다.
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (strip_component_suffix(registration.name), registration))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

/// 리포지토리 이름 → 등록정보 매핑 캐시
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (strip_component_suffix(registration.name), registration))
        .collect();

    print_cache_initialized("Repository", cache.len());
    cache
});

/// 등록 이름의 `_service` / `_repository` 접미사를 제거해 정규화한다.
///
/// 매크로가 생성하는 등록 이름은 `website_service`, `website_repository` 형태이므로
/// `website`로 정규화해 타입 이름과 매칭한다.
fn strip_component_suffix(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 싱글톤 의존성 주입 컨테이너
///
/// 타입당 하나의 인스턴스를 보장하고, `Arc<T>` 필드 주입을 해결하며,
/// 초기화 중인 타입을 추적해 순환 참조를 조기에 감지합니다.
pub struct ServiceLocator {
    /// 생성된 인스턴스 캐시 (`TypeId` → 인스턴스)
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    /// 현재 초기화 중인 타입들 (순환 참조 방지용)
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// Spring의 `ApplicationContext.getBean(Class<T>)`에 해당합니다.
    /// 캐시 확인 → 순환 참조 검사 → 레지스트리 검색 → 생성/캐싱 순서로 처리하며,
    /// 미등록 타입이나 순환 의존성은 명확한 메시지와 함께 패닉합니다.
    ///
    /// ```rust,ignore
    /// let website_service = ServiceLocator::get::<WebsiteService>();
    /// ```
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        // 이미 생성된 인스턴스 확인
        {
            let instances = LOCATOR.instances.read().unwrap();
            if let Some(instance) = instances.get(&type_id) {
                return instance.clone()
                    .downcast::<T>()
                    .expect("Type mismatch in ServiceLocator");
            }
        }

        // 순환 참조 검사
        {
            let initializing = LOCATOR.initializing.read().unwrap();
            if initializing.contains(&type_id) {
                eprintln!("❌ Circular dependency detected for type: {}", type_name);
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }
        {
            let mut initializing = LOCATOR.initializing.write().unwrap();
            initializing.insert(type_id);
        }

        let result = std::panic::catch_unwind(|| Self::construct::<T>(type_name));

        {
            let mut initializing = LOCATOR.initializing.write().unwrap();
            initializing.remove(&type_id);
        }

        match result {
            Ok(instance) => instance,
            Err(e) => {
                eprintln!("ERROR: Failed to create instance for {}: {:?}", type_name, e);
                panic!("Failed to create instance for {}", type_name);
            }
        }
    }

    /// 레지스트리에서 등록 정보를 찾아 인스턴스를 생성하고 캐시에 넣는다.
    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let mut instances = LOCATOR.instances.write().unwrap();

        // 더블 체크: 락 대기 중 다른 스레드가 먼저 생성했을 수 있다
        if let Some(instance) = instances.get(&type_id) {
            return instance.clone()
                .downcast::<T>()
                .expect("Type mismatch in ServiceLocator");
        }

        let simple_name = type_name.rsplit("::").next().unwrap_or(type_name);

        let constructor = if let Some(entity) = simple_name.strip_suffix("Repository") {
            REPOSITORY_NAME_CACHE
                .get(&entity.to_lowercase())
                .map(|registration| registration.constructor)
                .unwrap_or_else(|| panic!("No repository found for entity: {}", entity.to_lowercase()))
        } else if let Some(entity) = simple_name.strip_suffix("Service") {
            SERVICE_NAME_CACHE
                .get(&entity.to_lowercase())
                .map(|registration| registration.constructor)
                .unwrap_or_else(|| panic!("No service found for entity: {}", entity.to_lowercase()))
        } else {
            panic!(
                "Service not found: {}. Make sure it's registered with #[service] or #[repository] macro, or manually registered with ServiceLocator::set()",
                type_name
            );
        };

        let boxed_instance = (constructor)();
        match boxed_instance.downcast::<Arc<T>>() {
            Ok(arc_instance) => {
                let instance = (*arc_instance).clone();
                instances.insert(type_id, instance.clone() as Arc<dyn Any + Send + Sync>);
                instance
            }
            Err(_) => panic!("Type mismatch for component: {}", simple_name),
        }
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// Spring의 `registerSingleton()`에 해당하며, 매크로로 관리되지 않는
    /// 인프라 컴포넌트(Database, RedisClient, RoomRegistry 등)를 부트스트랩
    /// 시점에 등록할 때 사용합니다. 이후 `Arc<T>` 필드 주입으로 참조됩니다.
    ///
    /// ```rust,ignore
    /// let database = Arc::new(Database::new().await?);
    /// ServiceLocator::set(database);
    /// ```
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();
        let simple_name = type_name.rsplit("::").next().unwrap_or(type_name);

        println!("📦 Registering: {}", simple_name);

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 지연 초기화 대신 부트스트랩에서 의존성 그래프를 전부 해결해
    /// 설정 오류를 서버 기동 전에 드러냅니다. 데이터 계층이 비즈니스 계층보다
    /// 먼저 초기화되도록 리포지토리 → 서비스 순서를 유지합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_component_suffix() {
        assert_eq!(strip_component_suffix("website_service"), "website");
        assert_eq!(strip_component_suffix("reservation_repository"), "reservation");
        assert_eq!(strip_component_suffix("token"), "token");
    }

    #[test]
    fn test_set_and_get_infrastructure_component() {
        struct FakeInfra {
            value: u32,
        }

        ServiceLocator::set(Arc::new(FakeInfra { value: 7 }));
        // set()으로 등록한 타입은 이름 규칙과 무관하게 캐시에서 조회된다
        let infra = {
            let instances = LOCATOR.instances.read().unwrap();
            instances
                .get(&TypeId::of::<FakeInfra>())
                .cloned()
                .and_then(|i| i.downcast::<FakeInfra>().ok())
                .expect("FakeInfra must be registered")
        };
        assert_eq!(infra.value, 7);
    }
}
