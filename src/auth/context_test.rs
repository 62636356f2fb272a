use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use any_spawner::Executor;
use async_trait::async_trait;
use leptos::reactive::owner::Owner;

use super::*;
use crate::net::types::LoginCredentials;
use crate::util::token_storage::MemoryTokenStorage;

struct StaticStore {
    session: RwSignal<SessionState>,
    current_user_calls: AtomicUsize,
}

impl StaticStore {
    fn new(session: RwSignal<SessionState>) -> Self {
        Self { session, current_user_calls: AtomicUsize::new(0) }
    }
}

#[async_trait(?Send)]
impl AuthStore for StaticStore {
    fn session(&self) -> Signal<SessionState> {
        self.session.into()
    }

    async fn login(&self, _credentials: LoginCredentials) -> Result<User, AuthError> {
        Err(AuthError::Unspecified)
    }

    async fn register(&self, _data: RegisterData) -> Result<User, AuthError> {
        Err(AuthError::Unspecified)
    }

    fn logout(&self) {
        self.session.set(SessionState::default());
    }

    async fn get_current_user(&self) -> Result<User, AuthError> {
        self.current_user_calls.fetch_add(1, Ordering::SeqCst);
        Err(AuthError::Rejected("expired".to_owned()))
    }
}

struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn success(&self, _text: &str) {}
    fn error(&self, _text: &str) {}
}

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        username: "alice".to_owned(),
        email: "a@b.com".to_owned(),
        nickname: None,
        phone: None,
        avatar_url: None,
    }
}

fn make_context(state: SessionState) -> (RwSignal<SessionState>, AuthContext) {
    let session = RwSignal::new(state);
    let actions = AuthActions::new(
        Arc::new(StaticStore::new(session)),
        Arc::new(MemoryTokenStorage::new()),
        Arc::new(SilentNotifier),
        &AuthConfig::default(),
    );
    (session, AuthContext::new(actions))
}

// =============================================================
// use_auth
// =============================================================

#[test]
fn use_auth_without_owner_is_missing_provider() {
    assert!(matches!(use_auth(), Err(AuthError::MissingProvider)));
}

#[test]
fn use_auth_without_provider_is_missing_provider() {
    let owner = Owner::new();
    let result = owner.with(use_auth);
    assert!(matches!(result, Err(AuthError::MissingProvider)));
}

#[test]
fn use_auth_returns_provided_context() {
    let owner = Owner::new();
    let found = owner.with(|| {
        let (_, ctx) = make_context(SessionState::default());
        provide_context(ctx);
        use_auth().is_ok()
    });
    assert!(found);
}

#[test]
#[should_panic(expected = "AuthProvider")]
fn expect_auth_panics_without_provider() {
    let owner = Owner::new();
    owner.with(|| {
        let _ = expect_auth();
    });
}

// =============================================================
// AuthContext reads
// =============================================================

#[test]
fn context_reflects_session_fields() {
    let (_, ctx) = make_context(SessionState {
        user: Some(make_user()),
        token: Some("T".to_owned()),
        loading: true,
        error: Some("oops".to_owned()),
    });
    assert_eq!(ctx.user(), Some(make_user()));
    assert_eq!(ctx.token().as_deref(), Some("T"));
    assert!(ctx.loading());
    assert_eq!(ctx.error().as_deref(), Some("oops"));
    assert!(ctx.is_authenticated());
}

#[test]
fn context_sees_store_updates() {
    let (session, ctx) = make_context(SessionState::default());
    assert!(!ctx.is_authenticated());
    session.update(|s| {
        s.user = Some(make_user());
        s.token = Some("T".to_owned());
    });
    assert!(ctx.is_authenticated());
    ctx.logout();
    assert!(!ctx.is_authenticated());
    assert_eq!(ctx.user(), None);
}

#[test]
fn context_clear_error_is_noop() {
    let (_, ctx) = make_context(SessionState { error: Some("oops".to_owned()), ..SessionState::default() });
    ctx.clear_error();
    assert_eq!(ctx.error().as_deref(), Some("oops"));
}

// =============================================================
// AuthProvider mount
// =============================================================

fn mount_provider(store: Arc<StaticStore>, storage: Arc<MemoryTokenStorage>, children: Children) {
    let props = AuthProviderProps::builder()
        .store(store as Arc<dyn AuthStore>)
        .storage(storage as Arc<dyn TokenStorage>)
        .notifier(Arc::new(SilentNotifier) as Arc<dyn Notifier>)
        .children(children)
        .build();
    let _ = AuthProvider(props);
}

async fn settle(done: impl Fn() -> bool) {
    for _ in 0..50 {
        if done() {
            return;
        }
        Executor::tick().await;
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn provider_mount_clears_rejected_stored_token() {
    let _ = Executor::init_tokio();
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let session = RwSignal::new(SessionState {
                user: Some(make_user()),
                token: Some("T".to_owned()),
                ..SessionState::default()
            });
            let store = Arc::new(StaticStore::new(session));
            let storage = Arc::new(MemoryTokenStorage::with_token("token", "T"));
            let owner = Owner::new();
            owner.with(|| mount_provider(store.clone(), storage.clone(), Box::new(|| ().into_any())));

            settle(|| storage.get("token").is_none()).await;
            // Extra turns must not trigger a second resolution.
            settle(|| false).await;

            assert_eq!(store.current_user_calls.load(Ordering::SeqCst), 1);
            assert_eq!(storage.get("token"), None);
            assert!(session.get_untracked().user.is_none());
            drop(owner);
        })
        .await;
}

#[tokio::test]
async fn provider_mount_without_stored_token_skips_resolution() {
    let _ = Executor::init_tokio();
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let store = Arc::new(StaticStore::new(RwSignal::new(SessionState::default())));
            let storage = Arc::new(MemoryTokenStorage::new());
            let owner = Owner::new();
            owner.with(|| mount_provider(store.clone(), storage.clone(), Box::new(|| ().into_any())));

            settle(|| false).await;

            assert_eq!(store.current_user_calls.load(Ordering::SeqCst), 0);
            drop(owner);
        })
        .await;
}

#[tokio::test]
async fn provider_children_see_published_context() {
    let _ = Executor::init_tokio();
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let store = Arc::new(StaticStore::new(RwSignal::new(SessionState {
                user: Some(make_user()),
                token: Some("T".to_owned()),
                ..SessionState::default()
            })));
            let found = Arc::new(AtomicBool::new(false));
            let seen = found.clone();
            let owner = Owner::new();
            owner.with(|| {
                mount_provider(
                    store,
                    Arc::new(MemoryTokenStorage::new()),
                    Box::new(move || {
                        let ok = use_auth().is_ok_and(|ctx| ctx.is_authenticated());
                        seen.store(ok, Ordering::SeqCst);
                        ().into_any()
                    }),
                );
            });
            assert!(found.load(Ordering::SeqCst));
            drop(owner);
        })
        .await;
}
