//! Application Context
//!
//! Shared services and signals provided via Leptos Context API.

use std::cell::RefCell;
use std::rc::Rc;

use console_core::domain::StorageError;
use console_core::gateway::{seed_leads, LeadGateway, SimulatedLeadGateway};
use console_core::persisted::ErrorHook;
use console_core::repository::{KeyValueStorage, LocalOpportunityRepository};
use console_core::sort::{SortDirection, SortState};
use console_core::view::FilterState;
use console_core::{ConsoleConfig, OpportunityManager};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::persisted::PersistedSignal;
use crate::storage::TimerLatency;

pub type Opportunities = OpportunityManager<LocalOpportunityRepository>;

const NOTICE_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient toast message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// App-wide services and signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<ConsoleConfig>,
    gateway: StoredValue<Rc<dyn LeadGateway>, LocalStorage>,
    opportunities: StoredValue<RefCell<Opportunities>, LocalStorage>,
    /// Trigger to refetch leads from the gateway - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch leads from the gateway - write
    set_reload_trigger: WriteSignal<u32>,
    pub notice: ReadSignal<Option<Notice>>,
    notice_seq: StoredValue<u32>,
    set_notice: WriteSignal<Option<Notice>>,
    /// Set once any local storage write or read has failed
    pub storage_degraded: ReadSignal<bool>,
    pub leads_filter: PersistedSignal<FilterState>,
    pub leads_sort: PersistedSignal<SortState>,
    pub opportunities_sort: PersistedSignal<SortState>,
}

impl AppContext {
    pub fn new(config: ConsoleConfig, storage: Rc<dyn KeyValueStorage>, degraded: bool) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (notice, set_notice) = signal::<Option<Notice>>(None);
        let (storage_degraded, set_storage_degraded) = signal(degraded);

        let seed = seed_leads().unwrap_or_else(|e| {
            log::error!("{}", e);
            Vec::new()
        });
        let gateway: Rc<dyn LeadGateway> = Rc::new(SimulatedLeadGateway::new(
            seed,
            config.gateway.clone(),
            TimerLatency,
            random_seed(),
        ));

        let repository = LocalOpportunityRepository::with_hook(
            &config.storage.opportunities,
            storage.clone(),
            degrade_hook(set_storage_degraded),
        );
        let manager = OpportunityManager::new(repository, config.conversion_policy);

        let keys = &config.storage;
        let leads_filter = PersistedSignal::new(
            &keys.leads_filter,
            FilterState::default(),
            storage.clone(),
            degrade_hook(set_storage_degraded),
        );
        let leads_sort = PersistedSignal::new(
            &keys.leads_table_sort,
            SortState::new("score", SortDirection::Desc),
            storage.clone(),
            degrade_hook(set_storage_degraded),
        );
        let opportunities_sort = PersistedSignal::new(
            &keys.opportunities_table_sort,
            SortState::unsorted(),
            storage,
            degrade_hook(set_storage_degraded),
        );

        Self {
            config: StoredValue::new(config),
            gateway: StoredValue::new_local(gateway),
            opportunities: StoredValue::new_local(RefCell::new(manager)),
            reload_trigger,
            set_reload_trigger,
            notice,
            notice_seq: StoredValue::new(0),
            set_notice,
            storage_degraded,
            leads_filter,
            leads_sort,
            opportunities_sort,
        }
    }

    pub fn config(&self) -> ConsoleConfig {
        self.config.get_value()
    }

    pub fn gateway(&self) -> Rc<dyn LeadGateway> {
        self.gateway.get_value()
    }

    /// Run `f` against the opportunity manager
    pub fn with_opportunities<U>(&self, f: impl FnOnce(&mut Opportunities) -> U) -> U {
        self.opportunities.with_value(|manager| f(&mut manager.borrow_mut()))
    }

    /// Trigger a refetch of leads
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Success, message.into());
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Error, message.into());
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }

    fn notify(&self, kind: NoticeKind, message: String) {
        self.notice_seq.update_value(|seq| *seq += 1);
        let id = self.notice_seq.get_value();
        self.set_notice.set(Some(Notice { id, kind, message }));

        let notice = self.notice;
        let set_notice = self.set_notice;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_DURATION_MS).await;
            // A newer notice keeps its own timer
            if notice.get_untracked().is_some_and(|n| n.id == id) {
                set_notice.set(None);
            }
        });
    }
}

fn degrade_hook(set_storage_degraded: WriteSignal<bool>) -> ErrorHook {
    Rc::new(move |key: &str, err: &StorageError| {
        log::warn!("persisted state {}: {}", key, err);
        set_storage_degraded.set(true);
    })
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}
