//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 백엔드 서비스의 싱글톤 기반 의존성 주입 시스템입니다.
//! Spring Framework의 ApplicationContext와 BeanFactory 역할을 단순화하여 구현합니다.
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 컴파일 타임 (Component Scanning)
//!    ├─ inventory::submit! → RepositoryRegistration / ServiceRegistration 수집
//!    └─ inventory::collect! → 전역 레지스트리 구성
//!
//! 2. 런타임 초기화 (Infrastructure Beans)
//!    ├─ Database, RedisClient 등 인프라 컴포넌트 직접 등록
//!    └─ ServiceLocator::set() → 전역 컨테이너에 저장
//!
//! 3. 의존성 해결
//!    ├─ ServiceLocator::get::<T>() → 캐시된 인스턴스 조회
//!    ├─ 없으면 타입 이름(BookRepository → "book")으로 등록 정보 검색
//!    └─ 생성자 호출 후 캐싱
//! ```
//!
//! ## 등록 예제
//!
//! ```rust,ignore
//! fn book_repository_constructor() -> Box<dyn Any + Send + Sync> {
//!     Box::new(BookRepository::instance())
//! }
//!
//! inventory::submit! {
//!     RepositoryRegistration {
//!         name: "book_repository",
//!         constructor: book_repository_constructor,
//!     }
//! }
//! ```
//!
//! 생성자는 반드시 `Box<Arc<T>>`를 반환해야 합니다. [`ServiceLocator::get`]은
//! 이 값을 `Arc<T>`로 다운캐스트합니다.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// 초기화 훅의 에러 타입
pub type InitError = Box<dyn std::error::Error + Send + Sync>;

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 서비스 초기화 로직을 수행합니다.
    async fn init(&self) -> Result<(), InitError>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션의 이름을 반환합니다.
    fn collection_name(&self) -> &str;

    /// 리포지토리 초기화 로직(인덱스 생성 등)을 수행합니다.
    async fn init(&self) -> Result<(), InitError>;
}

/// 서비스 등록 정보
pub struct ServiceRegistration {
    /// 등록 이름 (`book_service` 형식)
    pub name: &'static str,
    /// `Box<Arc<T>>`를 반환하는 생성자
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    /// 등록 이름 (`book_repository` 형식)
    pub name: &'static str,
    /// `Box<Arc<T>>`를 반환하는 생성자
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (extract_clean_name(registration.name), registration))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (extract_clean_name(registration.name), registration))
        .collect();

    print_cache_initialized("Repository", cache.len());
    cache
});

/// 등록 이름에서 접미사를 제거합니다 (`book_service` → `book`).
fn extract_clean_name(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 전체 타입 경로에서 마지막 세그먼트를 추출합니다.
fn extract_clean_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 타입 이름에서 등록 조회 키를 만듭니다 (`BookRepository` → `book`).
///
/// CamelCase 는 snake_case 로 변환됩니다 (`BookLoanService` → `book_loan`).
fn registry_key(clean_type_name: &str, suffix: &str) -> String {
    let stem = clean_type_name.strip_suffix(suffix).unwrap_or(clean_type_name);
    let mut key = String::with_capacity(stem.len() + 4);

    for (index, c) in stem.chars().enumerate() {
        if c.is_uppercase() && index > 0 {
            key.push('_');
        }
        key.extend(c.to_lowercase());
    }

    key
}

/// 전역 의존성 컨테이너
///
/// 모든 인스턴스는 `TypeId`로 식별되며 `Arc`로 공유됩니다.
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 등록된 인스턴스를 조회하거나 등록 정보를 통해 생성합니다.
    ///
    /// # Panics
    ///
    /// * 등록되지 않은 타입을 요청한 경우
    /// * 생성 중 같은 타입을 다시 요청하는 순환 참조가 발생한 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_name = std::any::type_name::<T>();

        match Self::try_get::<T>() {
            Some(instance) => instance,
            None => panic!(
                "Service not found: {}. Register it with inventory::submit! or ServiceLocator::set()",
                type_name
            ),
        }
    }

    /// [`get`](Self::get)과 같지만 등록되지 않은 타입이면 `None`을 반환합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::cached::<T>() {
            return Some(instance);
        }

        {
            let mut initializing = LOCATOR.initializing.write().expect("ServiceLocator lock poisoned");
            if !initializing.insert(type_id) {
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        // 생성자가 다시 ServiceLocator를 호출할 수 있으므로 락을 잡지 않은 상태로 생성
        let created = Self::construct::<T>(extract_clean_type_name(type_name));

        LOCATOR
            .initializing
            .write()
            .expect("ServiceLocator lock poisoned")
            .remove(&type_id);

        let instance = created?;
        let mut instances = LOCATOR.instances.write().expect("ServiceLocator lock poisoned");
        let stored = instances
            .entry(type_id)
            .or_insert_with(|| instance as Arc<dyn Any + Send + Sync>)
            .clone();

        stored.downcast::<T>().ok()
    }

    fn cached<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().expect("ServiceLocator lock poisoned");
        instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    fn construct<T: 'static + Send + Sync>(clean_type_name: &str) -> Option<Arc<T>> {
        let constructor = if clean_type_name.ends_with("Repository") {
            REPOSITORY_NAME_CACHE
                .get(&registry_key(clean_type_name, "Repository"))
                .map(|registration| registration.constructor)
        } else if clean_type_name.ends_with("Service") {
            SERVICE_NAME_CACHE
                .get(&registry_key(clean_type_name, "Service"))
                .map(|registration| registration.constructor)
        } else {
            None
        };

        match constructor?().downcast::<Arc<T>>() {
            Ok(instance) => Some(*instance),
            Err(_) => panic!("Type mismatch for registration: {}", clean_type_name),
        }
    }

    /// 인프라 컴포넌트 인스턴스를 직접 등록합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let clean_name = extract_clean_type_name(std::any::type_name::<T>());
        log::info!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR.instances.write().expect("ServiceLocator lock poisoned");
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스 인스턴스를 생성합니다.
    ///
    /// 리포지토리를 먼저 생성한 뒤 서비스를 생성합니다.
    pub async fn initialize_all() -> Result<(), InitError> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _instance = (registration.constructor)();
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
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ManualComponent {
        value: u32,
    }

    #[test]
    fn test_extract_clean_name() {
        assert_eq!(extract_clean_name("book_service"), "book");
        assert_eq!(extract_clean_name("book_repository"), "book");
        assert_eq!(extract_clean_name("database"), "database");
    }

    #[test]
    fn test_extract_clean_type_name() {
        assert_eq!(
            extract_clean_type_name("library_index_backend::repositories::books::book_repo::BookRepository"),
            "BookRepository"
        );
        assert_eq!(extract_clean_type_name("Database"), "Database");
    }

    #[test]
    fn test_registry_key() {
        assert_eq!(registry_key("BookRepository", "Repository"), "book");
        assert_eq!(registry_key("BookService", "Service"), "book");
        assert_eq!(registry_key("BookLoanService", "Service"), "book_loan");
    }

    #[test]
    fn test_set_then_get_returns_same_instance() {
        ServiceLocator::set(Arc::new(ManualComponent { value: 7 }));

        let first = ServiceLocator::get::<ManualComponent>();
        let second = ServiceLocator::get::<ManualComponent>();

        assert_eq!(first.value, 7);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_try_get_unregistered_returns_none() {
        struct Unregistered;
        assert!(ServiceLocator::try_get::<Unregistered>().is_none());
    }
}
