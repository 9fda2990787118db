use std::sync::Arc;

use profilecard_config::EVENT_CHANNEL_CAPACITY;
use profilecard_core::{ProfileId, ProfileStore, Route};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::avatar::{AvatarRequest, AvatarTasks};
use crate::domain::{AppState, AvatarKey, NavFrame};
use crate::ports::AvatarLoader;
use crate::viewmodel::{screen_vm, ScreenVm};

pub struct AppKernel<A> {
    pub store: AppStore,
    profiles: ProfileStore,
    avatars: AvatarTasks<A>,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl<A> AppKernel<A>
where
    A: AvatarLoader,
{
    pub fn new(store: AppStore, profiles: ProfileStore, loader: A) -> Self {
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            profiles,
            avatars: AvatarTasks::new(Arc::new(loader), tx.clone()),
            tx,
            rx,
        }
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::MountCurrentView => {
                let frame = self.store.read(|s| *s.router.current_frame());
                self.mount(frame);
            }

            AppCommand::OpenDetails(id) => self.push(Route::UserDetails(id)),

            AppCommand::OpenLink(path) => match path.parse::<Route>() {
                Ok(route) => self.push(route),
                Err(e) => {
                    warn!("Rejected link `{}`: {}", path, e);
                    self.store
                        .apply(DomainEvent::UserError(format!("Cannot open `{path}`: {e}")));
                }
            },

            AppCommand::NavigateBack => {
                let top = self
                    .store
                    .read(|s| s.router.can_go_back().then(|| *s.router.current_frame()));
                match top {
                    Some(frame) => {
                        debug!("Leaving {}", frame.route);
                        self.avatars.cancel_view(frame.view_id);
                        self.store.apply(DomainEvent::RoutePopped);
                    }
                    None => debug!("Back pressed at root; ignoring"),
                }
            }

            AppCommand::DismissError => self.store.apply(DomainEvent::ErrorDismissed),
        }
    }

    /// Drain async results. Call once per UI frame.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        while let Ok(ev) = self.rx.try_recv() {
            if let Some(key) = ev.avatar_key() {
                if !self.store.read(|s| s.avatars.contains_key(&key)) {
                    debug!("Dropping avatar result for unmounted view {}", key.view_id);
                    continue;
                }
            }
            self.store.apply(ev);
            changed = true;
        }
        changed
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.tx.clone()
    }

    pub fn state(&self) -> AppState {
        self.store.state()
    }

    pub fn current_route(&self) -> Route {
        self.store.read(|s| s.router.current())
    }

    pub fn screen(&self) -> ScreenVm {
        self.store.read(|s| screen_vm(s, &self.profiles))
    }

    pub fn has_pending_avatars(&self) -> bool {
        self.store
            .read(|s| s.avatars.values().any(|a| a.is_loading()))
    }

    fn push(&mut self, route: Route) {
        let frame = NavFrame::new(route);
        debug!("Navigating to {}", route);
        self.store.apply(DomainEvent::RoutePushed(frame));
        self.mount(frame);
    }

    /// Starts avatar fetches for everything `frame` shows. Slots that already
    /// exist are left alone, so remounting is harmless.
    fn mount(&mut self, frame: NavFrame) {
        let wanted: Vec<(ProfileId, String)> = match frame.route {
            Route::UsersList => self
                .profiles
                .all()
                .iter()
                .map(|p| (p.id, p.avatar_reference.clone()))
                .collect(),
            Route::UserDetails(id) => match self.profiles.by_id(id) {
                Ok(p) => vec![(p.id, p.avatar_reference.clone())],
                Err(e) => {
                    warn!("{}", e);
                    Vec::new()
                }
            },
        };

        for (profile_id, reference) in wanted {
            let key = AvatarKey {
                view_id: frame.view_id,
                profile_id,
            };
            if self.store.read(|s| s.avatars.contains_key(&key)) {
                continue;
            }

            self.store.apply(DomainEvent::AvatarRequested(key));
            if let Err(e) = self.avatars.request(key, AvatarRequest::circle(reference)) {
                self.store.apply(DomainEvent::AvatarFailed {
                    key,
                    message: e.to_string(),
                });
            }
        }
    }
}
