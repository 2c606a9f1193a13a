//! Root application module.
//!
//! Contains the main App component and [`AppContext`] — the reactive state
//! shared across the component tree — plus the orchestration for the
//! health/session gate and folder navigation. All multi-step operations
//! live here so their ordering guarantees (selection-clear before fetch,
//! loading flag bracketing both outcome paths) sit in one place.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::api::error::{ApiError, FolderRecovery};
use crate::components::notifications::ToastHost;
use crate::components::router::AppRouter;
use crate::config::{
    API_HEALTH, FOLDER_LOAD_ERROR_MSG, HEALTH_TIMEOUT_MS, REVALIDATE_EVERY_N_VISITS,
    SESSION_EXPIRED_MSG, TOAST_DISMISS_MS, api_url,
};
use crate::core::health::BackendHealth;
use crate::core::navigation::{FetchEpoch, FolderPath, leaf_name};
use crate::core::selection::SelectionState;
use crate::core::session::{AuthSnapshot, RevalidatePolicy, VisitOutcome};
use crate::models::{Route, StorageEntry, User};
use crate::utils::{dom, persist};

// ============================================================================
// Liveness
// ============================================================================

/// Last-known backend reachability, readable by the HTTP layer before it
/// issues authenticated calls. A `Copy` wrapper over a signal so it can be
/// handed by value into async code and still share one state.
#[derive(Clone, Copy)]
pub struct Liveness(RwSignal<BackendHealth>);

impl Liveness {
    pub fn new() -> Self {
        Self(RwSignal::new(BackendHealth::Checking))
    }

    /// Reactive read for the router and views.
    pub fn get(&self) -> BackendHealth {
        self.0.get()
    }

    /// Non-reactive read for the fetch layer.
    pub fn current(&self) -> BackendHealth {
        self.0.get_untracked()
    }

    pub fn mark_alive(&self) {
        if self.current() != BackendHealth::Alive {
            self.0.set(BackendHealth::Alive);
        }
    }

    pub fn mark_dead(&self) {
        if self.current() != BackendHealth::Dead {
            self.0.set(BackendHealth::Dead);
        }
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AuthState
// ============================================================================

/// Authentication state backed by localStorage.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub snapshot: RwSignal<AuthSnapshot>,
}

impl AuthState {
    /// Rehydrate from localStorage at startup.
    pub fn restore() -> Self {
        Self {
            snapshot: RwSignal::new(persist::load_auth()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.with_untracked(|auth| auth.is_authenticated)
    }

    /// Promote to authenticated and persist the user.
    pub fn login(&self, user: User) {
        persist::save_auth(&user);
        self.snapshot.set(AuthSnapshot::authenticated(user));
    }

    /// Demote to anonymous and drop the persisted keys.
    pub fn logout(&self) {
        persist::clear_auth();
        self.snapshot.set(AuthSnapshot::anonymous());
    }
}

// ============================================================================
// NavigationState
// ============================================================================

/// Folder navigation state for the file browser.
#[derive(Clone, Copy)]
pub struct NavigationState {
    pub folder_path: RwSignal<FolderPath>,
    pub folder_content: RwSignal<Vec<StorageEntry>>,
    pub loading: RwSignal<bool>,
    pub search_name: RwSignal<String>,
    pub searched_content: RwSignal<Vec<StorageEntry>>,
    /// False until the first listing fetch completes or fails.
    pub initialized: RwSignal<bool>,
    epoch: RwSignal<FetchEpoch>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            folder_path: RwSignal::new(FolderPath::root()),
            folder_content: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            search_name: RwSignal::new(String::new()),
            searched_content: RwSignal::new(Vec::new()),
            initialized: RwSignal::new(false),
            epoch: RwSignal::new(FetchEpoch::default()),
        }
    }

    /// Search mode is active while there are search results to show.
    pub fn is_search_mode(&self) -> bool {
        self.searched_content.with(|found| !found.is_empty())
    }

    fn begin_fetch(&self) -> FetchEpoch {
        let next = self.epoch.get_untracked().next();
        self.epoch.set(next);
        next
    }

    fn is_current(&self, epoch: FetchEpoch) -> bool {
        epoch.is_current(self.epoch.get_untracked())
    }

    /// Fold a listing response into the navigation state.
    ///
    /// A response whose epoch is no longer current is dropped without
    /// touching any signal; the newer fetch owns the loading flag. Domain
    /// failures reset the path to the storage root when `allow_recovery`
    /// is set; the recovery fetch itself passes `false` so a failing root
    /// cannot loop. No browser calls, so the ordering rules are
    /// host-testable.
    fn apply_listing(
        &self,
        epoch: FetchEpoch,
        requested: &FolderPath,
        result: Result<Vec<StorageEntry>, ApiError>,
        allow_recovery: bool,
    ) -> ListingAction {
        if !self.is_current(epoch) {
            return ListingAction::Stale;
        }

        let action = match result {
            Ok(content) => {
                self.folder_content.set(content);
                ListingAction::Applied
            }
            Err(err) => match err.folder_recovery() {
                FolderRecovery::RedirectRoot(detail) if allow_recovery => {
                    let message = if detail.is_empty() {
                        err.to_string()
                    } else {
                        detail
                    };
                    let refetch_root = !requested.is_root();
                    if refetch_root {
                        self.folder_path.set(FolderPath::root());
                    }
                    ListingAction::RecoverRoot {
                        message,
                        refetch_root,
                    }
                }
                FolderRecovery::SessionExpired => ListingAction::SessionExpired,
                _ => ListingAction::Notify {
                    cause: err.to_string(),
                },
            },
        };

        self.initialized.set(true);
        self.loading.set(false);
        action
    }
}

/// Follow-up owed by the caller after a listing response is folded in.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ListingAction {
    /// Dropped; a newer fetch owns the state.
    Stale,
    /// Content applied; the visible URL should be synced.
    Applied,
    /// Domain failure: warn with `message`; when `refetch_root`, navigate
    /// to the storage root and fetch it once.
    RecoverRoot { message: String, refetch_root: bool },
    /// 401: demote to anonymous and go to the login page.
    SessionExpired,
    /// Anything else: generic toast, log `cause`, no retry.
    Notify { cause: String },
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Toasts
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warn,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Transient notifications, auto-dismissed after [`TOAST_DISMISS_MS`].
#[derive(Clone, Copy)]
pub struct ToastState {
    pub toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message.into());
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.push(ToastLevel::Warn, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast { id, level, message });
        });

        let state = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
            state.dismiss(id);
        });
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; any child component can grab
/// it with `use_context::<AppContext>()`. All fields are signals or signal
/// wrappers, so the context itself is `Copy`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Last-known backend liveness, shared with the HTTP layer.
    pub health: Liveness,
    /// Authentication state, persisted to localStorage.
    pub auth: AuthState,
    /// Folder navigation state.
    pub nav: NavigationState,
    /// Selected ids and the cut buffer.
    pub selection: RwSignal<SelectionState>,
    /// Transient notifications.
    pub toasts: ToastState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            health: Liveness::new(),
            auth: AuthState::restore(),
            nav: NavigationState::new(),
            selection: RwSignal::new(SelectionState::new()),
            toasts: ToastState::new(),
        }
    }

    // ------------------------------------------------------------------
    // Health / session gate
    // ------------------------------------------------------------------

    /// One-shot startup routine: probe the backend, then reconcile the
    /// persisted session against the server. Invoked once from the root
    /// component constructor, independent of the render lifecycle.
    pub async fn bootstrap(&self) {
        let outcome = api::http::probe(&api_url(API_HEALTH), HEALTH_TIMEOUT_MS).await;
        let health = outcome.clone().into_health();

        match health {
            BackendHealth::Alive => dom::console_log("backend is up"),
            _ => dom::console_warn(&format!("health check failed: {:?}", outcome)),
        }
        self.health.0.set(health);

        if !health.is_alive() {
            return;
        }

        if self.auth.is_authenticated() {
            self.revalidate_session().await;
        } else {
            self.adopt_cookie_session().await;
        }
    }

    /// Re-check a session the client believes is live. On failure the user
    /// is demoted, persisted keys are dropped, and the app redirects to the
    /// login page with a warning.
    pub async fn revalidate_session(&self) {
        if !self.auth.is_authenticated() {
            return;
        }

        match api::auth::check_session(self.health).await {
            Ok(user) => {
                let changed = self
                    .auth
                    .snapshot
                    .with_untracked(|auth| auth.user.as_ref() != Some(&user));
                if changed {
                    self.auth.login(user);
                }
            }
            Err(err) => {
                dom::console_warn(&format!("session validation failed: {}", err));
                self.expire_session();
            }
        }
    }

    /// Anonymous client, but the browser may still hold a live session
    /// cookie; adopt it if the server recognizes one.
    pub async fn adopt_cookie_session(&self) {
        if self.auth.is_authenticated() {
            return;
        }

        match api::auth::check_session(self.health).await {
            Ok(user) => self.auth.login(user),
            Err(_) => dom::console_log("no active session found"),
        }
    }

    /// Route-change hook: revalidate the session every N visits instead of
    /// on each one, with the counter persisted across reloads.
    pub fn record_page_visit(&self) {
        let policy = RevalidatePolicy::new(REVALIDATE_EVERY_N_VISITS);
        match policy.record_visit(persist::page_visits()) {
            VisitOutcome::Revalidate => {
                persist::set_page_visits(0);
                let ctx = *self;
                spawn_local(async move { ctx.revalidate_session().await });
            }
            VisitOutcome::Defer(visits) => persist::set_page_visits(visits),
        }
    }

    // ------------------------------------------------------------------
    // Folder navigation
    // ------------------------------------------------------------------

    /// Descend into a child folder of the current path.
    pub async fn go_to_folder(&self, name: &str) {
        let next = self.nav.folder_path.get_untracked().enter(name);
        self.nav.folder_path.set(next.clone());
        self.fetch_listing(next).await;
    }

    /// Ascend one folder. A no-op at the root; the path never empties.
    pub async fn go_to_prev_folder(&self) {
        let Some(parent) = self.nav.folder_path.get_untracked().parent() else {
            return;
        };
        self.nav.folder_path.set(parent.clone());
        self.fetch_listing(parent).await;
    }

    /// Jump to an absolute path, e.g. from the routed URL or a breadcrumb.
    pub async fn load_folder(&self, url: &str) {
        let path = FolderPath::from_url(url);
        self.nav.folder_path.set(path.clone());
        self.fetch_listing(path).await;
    }

    /// Shared tail of every navigation: selection-clear happens before the
    /// fetch, and the loading flag brackets it on both outcome paths. The
    /// epoch guard drops responses that lost a navigation race.
    async fn fetch_listing(&self, path: FolderPath) {
        let epoch = self.begin_navigation();
        let result = api::storage::folder_content(self.health, &path.url()).await;

        match self.nav.apply_listing(epoch, &path, result, true) {
            ListingAction::Stale => {}
            ListingAction::Applied => {
                let target = Route::Files { path: path.url() };
                if Route::current() != target {
                    target.push();
                }
            }
            ListingAction::RecoverRoot {
                message,
                refetch_root,
            } => {
                self.toasts.warn(message);
                if refetch_root {
                    Route::files_root().push();
                    self.fetch_root_after_failure().await;
                }
            }
            ListingAction::SessionExpired => self.expire_session(),
            ListingAction::Notify { cause } => self.notify_listing_failure(&cause),
        }
    }

    /// One recovery pass at the storage root. Takes a fresh epoch like any
    /// other fetch, so a navigation started meanwhile wins over a slow
    /// recovery response. Further domain failures only notify.
    async fn fetch_root_after_failure(&self) {
        let epoch = self.begin_navigation();
        let root = FolderPath::root();
        let result = api::storage::folder_content(self.health, &root.url()).await;

        match self.nav.apply_listing(epoch, &root, result, false) {
            ListingAction::SessionExpired => self.expire_session(),
            ListingAction::Notify { cause } => self.notify_listing_failure(&cause),
            _ => {}
        }
    }

    /// Start a listing fetch: selection cleared first, loading flag raised,
    /// epoch bumped.
    fn begin_navigation(&self) -> FetchEpoch {
        self.selection.update(|sel| sel.clear());
        self.nav.loading.set(true);
        self.nav.begin_fetch()
    }

    /// Demote to anonymous and send to the login page with the expiry
    /// notice.
    fn expire_session(&self) {
        self.auth.logout();
        if Route::current() != Route::Login {
            Route::Login.push();
        }
        self.toasts.warn(SESSION_EXPIRED_MSG);
    }

    /// Whether the user is still on `path`. Slow multi-request operations
    /// check this before reloading the listing, so finishing a paste or
    /// delete never yanks the view back to where it started.
    fn still_viewing(&self, path: &FolderPath) -> bool {
        self.nav.folder_path.get_untracked() == *path
    }

    fn notify_listing_failure(&self, cause: &str) {
        dom::console_error(&format!("folder load failed: {}", cause));
        self.toasts.error(FOLDER_LOAD_ERROR_MSG);
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    pub async fn run_search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.clear_search();
            return;
        }

        self.nav.search_name.set(query.to_string());
        match api::storage::search(self.health, query).await {
            Ok(found) => self.nav.searched_content.set(found),
            Err(err) => {
                dom::console_error(&format!("search failed: {}", err));
                self.toasts
                    .error(err.detail().unwrap_or("Search failed. Please try again later"));
            }
        }
    }

    pub fn clear_search(&self) {
        self.nav.search_name.set(String::new());
        self.nav.searched_content.set(Vec::new());
    }

    // ------------------------------------------------------------------
    // Cut / paste / delete / upload
    // ------------------------------------------------------------------

    /// Stage the current selection for a move.
    pub fn start_cut(&self) {
        self.selection.update(|sel| sel.start_cut());
    }

    /// Move every buffered id into the current folder, then reload it.
    pub async fn paste(&self) {
        let buffer = self.selection.with_untracked(|sel| sel.buffer_ids());
        if buffer.is_empty() {
            return;
        }

        let dest = self.nav.folder_path.get_untracked();
        for id in &buffer {
            let to = format!("{}{}", dest.url(), leaf_name(id));
            if let Err(err) = api::storage::move_resource(self.health, id, &to).await {
                self.toasts
                    .warn(err.detail().map(str::to_string).unwrap_or_else(|| err.to_string()));
                break;
            }
        }

        self.selection.update(|sel| sel.end_cut());
        // Reload only if the user is still looking at the paste target
        if self.still_viewing(&dest) {
            self.fetch_listing(dest).await;
        }
    }

    /// Delete every selected id, then reload the current folder.
    pub async fn delete_selected(&self) {
        let selected = self.selection.with_untracked(|sel| sel.selected_ids());
        if selected.is_empty() {
            return;
        }
        let origin = self.nav.folder_path.get_untracked();

        for id in &selected {
            if let Err(err) = api::storage::delete_resource(self.health, id).await {
                self.toasts
                    .warn(err.detail().map(str::to_string).unwrap_or_else(|| err.to_string()));
                break;
            }
        }

        if self.still_viewing(&origin) {
            self.fetch_listing(origin).await;
        }
    }

    /// Upload dropped files into the current folder, then reload it.
    pub async fn upload_files(&self, files: Vec<web_sys::File>) {
        if files.is_empty() {
            return;
        }
        let count = files.len();
        let dest = self.nav.folder_path.get_untracked();

        match api::storage::upload(self.health, &dest.url(), &files).await {
            Ok(()) => {
                self.toasts.info(format!(
                    "Uploaded {} file{}",
                    count,
                    if count == 1 { "" } else { "s" }
                ));
                if self.still_viewing(&dest) {
                    self.fetch_listing(dest).await;
                }
            }
            Err(err) => {
                dom::console_error(&format!("upload failed: {}", err));
                self.toasts.error(
                    err.detail()
                        .unwrap_or("Upload failed. Please try again later"),
                );
            }
        }
    }

    // ------------------------------------------------------------------
    // Auth operations
    // ------------------------------------------------------------------

    /// Sign in and move to the file browser. Errors surface as toasts.
    pub async fn sign_in(&self, username: String, password: String) {
        let credentials = api::auth::Credentials { username, password };
        match api::auth::sign_in(self.health, &credentials).await {
            Ok(user) => {
                self.auth.login(user);
                Route::files_root().push();
            }
            Err(err) => {
                self.toasts
                    .error(err.detail().unwrap_or("Sign-in failed. Please try again"));
            }
        }
    }

    /// Register a new account; the server signs it in on success.
    pub async fn sign_up(&self, username: String, password: String) {
        let credentials = api::auth::Credentials { username, password };
        match api::auth::sign_up(self.health, &credentials).await {
            Ok(user) => {
                self.auth.login(user);
                Route::files_root().push();
            }
            Err(err) => {
                self.toasts
                    .error(err.detail().unwrap_or("Registration failed. Please try again"));
            }
        }
    }

    /// End the server session, then demote locally regardless of outcome.
    pub async fn sign_out(&self) {
        if let Err(err) = api::auth::sign_out(self.health).await {
            dom::console_warn(&format!("sign-out request failed: {}", err));
        }
        self.auth.logout();
        self.clear_search();
        Route::Login.push();
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App component
// ============================================================================

/// Root application component.
///
/// Creates and provides the global [`AppContext`], kicks off the one-shot
/// bootstrap, and renders the router plus the toast host.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // One-shot initialization, deliberately outside any render effect.
    spawn_local(async move { ctx.bootstrap().await });

    view! {
        <AppRouter />
        <ToastHost />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryType;

    fn entry(name: &str) -> StorageEntry {
        StorageEntry {
            path: String::new(),
            name: name.to_string(),
            size: Some(1),
            kind: EntryType::File,
        }
    }

    fn names(ctx: &AppContext) -> Vec<String> {
        ctx.nav
            .folder_content
            .get_untracked()
            .iter()
            .map(|e| e.name.clone())
            .collect()
    }

    #[test]
    fn test_navigation_clears_selection_and_brackets_loading() {
        let ctx = AppContext::new();
        ctx.selection.update(|sel| sel.toggle("a.txt"));

        let path = FolderPath::from_url("docs/");
        ctx.nav.folder_path.set(path.clone());
        let epoch = ctx.begin_navigation();
        assert!(!ctx.selection.with_untracked(|sel| sel.has_selection()));
        assert!(ctx.nav.loading.get_untracked());

        let action = ctx
            .nav
            .apply_listing(epoch, &path, Ok(vec![entry("a.txt")]), true);
        assert_eq!(action, ListingAction::Applied);
        assert!(!ctx.nav.loading.get_untracked());
        assert!(ctx.nav.initialized.get_untracked());
        assert_eq!(names(&ctx), vec!["a.txt"]);
    }

    #[test]
    fn test_stale_listing_response_is_dropped() {
        let ctx = AppContext::new();
        let first = ctx.begin_navigation();
        let second = ctx.begin_navigation();

        let action =
            ctx.nav
                .apply_listing(first, &FolderPath::root(), Ok(vec![entry("old.txt")]), true);
        assert_eq!(action, ListingAction::Stale);
        assert!(names(&ctx).is_empty());
        // The newer fetch still owns the loading flag
        assert!(ctx.nav.loading.get_untracked());

        let action =
            ctx.nav
                .apply_listing(second, &FolderPath::root(), Ok(vec![entry("new.txt")]), true);
        assert_eq!(action, ListingAction::Applied);
        assert_eq!(names(&ctx), vec!["new.txt"]);
        assert!(!ctx.nav.loading.get_untracked());
    }

    #[test]
    fn test_conflict_redirects_to_root_with_server_detail() {
        let ctx = AppContext::new();
        let path = FolderPath::from_url("x/");
        ctx.nav.folder_path.set(path.clone());

        let epoch = ctx.begin_navigation();
        let action = ctx.nav.apply_listing(
            epoch,
            &path,
            Err(ApiError::Conflict("already exists".to_string())),
            true,
        );
        assert_eq!(
            action,
            ListingAction::RecoverRoot {
                message: "already exists".to_string(),
                refetch_root: true,
            }
        );
        assert!(ctx.nav.folder_path.get_untracked().is_root());
        assert!(ctx.nav.initialized.get_untracked());
        assert!(!ctx.nav.loading.get_untracked());
    }

    #[test]
    fn test_domain_failure_at_root_does_not_refetch() {
        let ctx = AppContext::new();
        let root = FolderPath::root();

        let epoch = ctx.begin_navigation();
        let action =
            ctx.nav
                .apply_listing(epoch, &root, Err(ApiError::NotFound(String::new())), true);
        match action {
            ListingAction::RecoverRoot { refetch_root, .. } => assert!(!refetch_root),
            other => panic!("unexpected action: {:?}", other),
        }
        assert!(ctx.nav.folder_path.get_untracked().is_root());
    }

    #[test]
    fn test_recovery_response_loses_to_newer_navigation() {
        let ctx = AppContext::new();

        // A domain failure on "x/" resets to the root and wants a recovery
        // fetch
        let path = FolderPath::from_url("x/");
        ctx.nav.folder_path.set(path.clone());
        let failed = ctx.begin_navigation();
        let action = ctx.nav.apply_listing(
            failed,
            &path,
            Err(ApiError::Conflict("gone".to_string())),
            true,
        );
        assert!(matches!(
            action,
            ListingAction::RecoverRoot {
                refetch_root: true,
                ..
            }
        ));
        let recovery = ctx.begin_navigation();

        // The user navigates again while the recovery request is in flight
        let newer_path = FolderPath::from_url("docs/");
        ctx.nav.folder_path.set(newer_path.clone());
        let newer = ctx.begin_navigation();
        let action =
            ctx.nav
                .apply_listing(newer, &newer_path, Ok(vec![entry("report.txt")]), true);
        assert_eq!(action, ListingAction::Applied);

        // The slow recovery response must not overwrite the newer listing
        // or stomp its state
        let action = ctx.nav.apply_listing(
            recovery,
            &FolderPath::root(),
            Ok(vec![entry("root.txt")]),
            false,
        );
        assert_eq!(action, ListingAction::Stale);
        assert_eq!(names(&ctx), vec!["report.txt"]);
        assert_eq!(ctx.nav.folder_path.get_untracked(), newer_path);
        assert!(!ctx.nav.loading.get_untracked());
    }

    #[test]
    fn test_recovery_pass_does_not_loop_on_domain_failure() {
        let ctx = AppContext::new();
        let root = FolderPath::root();

        let epoch = ctx.begin_navigation();
        let action = ctx.nav.apply_listing(
            epoch,
            &root,
            Err(ApiError::NotFound("gone".to_string())),
            false,
        );
        assert!(matches!(action, ListingAction::Notify { .. }));
        assert!(!ctx.nav.loading.get_untracked());
    }

    #[test]
    fn test_unauthorized_listing_expires_session() {
        let ctx = AppContext::new();

        let epoch = ctx.begin_navigation();
        let action = ctx.nav.apply_listing(
            epoch,
            &FolderPath::root(),
            Err(ApiError::Unauthorized(String::new())),
            true,
        );
        assert_eq!(action, ListingAction::SessionExpired);
        assert!(!ctx.nav.loading.get_untracked());
    }

    #[test]
    fn test_reload_is_skipped_after_navigating_away() {
        let ctx = AppContext::new();
        let origin = FolderPath::from_url("docs/");
        ctx.nav.folder_path.set(origin.clone());
        assert!(ctx.still_viewing(&origin));

        // Navigating elsewhere while the operation runs drops the reload
        ctx.nav.folder_path.set(FolderPath::from_url("pics/"));
        assert!(!ctx.still_viewing(&origin));
    }

    #[test]
    fn test_failed_session_check_demotes_to_anonymous() {
        let auth = AuthState::restore();
        auth.login(User {
            username: "alice".to_string(),
        });
        assert!(auth.is_authenticated());

        auth.logout();
        let snapshot = auth.snapshot.get_untracked();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
    }
}
