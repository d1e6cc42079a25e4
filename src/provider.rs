// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! LISP mapping provider
//!
//! The provider sits between a LISP controller and the mapping subsystem. It
//! registers a listener with the controller for router and message events,
//! forwards them to an actor task, and the actor turns every record of an
//! incoming Map-Register into a [`MappingEntry`] on the output channel.

use crate::entry_builder::build_entries;
use crate::error::{AddressError, ProviderError};
use crate::extensions::ExtensionRegistry;
use crate::mapping::{DeviceId, MappingEntry};
use crate::protocols::{LispMessage, LispType};
use std::collections::HashSet;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Default URI scheme for router device ids
pub const DEFAULT_SCHEME: &str = "lisp";

/// Identifies a LISP router by its control-plane address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LispRouterId(IpAddr);

impl LispRouterId {
    pub fn new(ip: IpAddr) -> Self {
        Self(ip)
    }

    pub fn ip(&self) -> IpAddr {
        self.0
    }

    /// Device id of this router under `scheme`, e.g. `lisp:192.0.2.1`
    pub fn device_id(&self, scheme: &str) -> DeviceId {
        DeviceId::with_scheme(scheme, self.0)
    }
}

impl fmt::Display for LispRouterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LispRouterId {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse()
            .map(Self)
            .map_err(|_| AddressError::InvalidRouterId(s.to_string()))
    }
}

impl From<IpAddr> for LispRouterId {
    fn from(ip: IpAddr) -> Self {
        Self(ip)
    }
}

/// Receives router lifecycle events
pub trait RouterListener: Send + Sync {
    fn router_added(&self, router: LispRouterId);
    fn router_removed(&self, router: LispRouterId);
    fn router_changed(&self, router: LispRouterId);
}

/// Receives control messages exchanged with routers
pub trait MessageListener: Send + Sync {
    fn handle_incoming_message(&self, router: LispRouterId, message: Arc<dyn LispMessage>);
    fn handle_outgoing_message(&self, router: LispRouterId, message: Arc<dyn LispMessage>);
}

/// Controller hooks the provider attaches to
///
/// Listeners are removed by identity (`Arc::ptr_eq`).
pub trait LispController: Send + Sync {
    fn add_router_listener(&self, listener: Arc<dyn RouterListener>);
    fn remove_router_listener(&self, listener: &Arc<dyn RouterListener>);
    fn add_message_listener(&self, listener: Arc<dyn MessageListener>);
    fn remove_message_listener(&self, listener: &Arc<dyn MessageListener>);
}

/// Events handled by the provider actor
#[derive(Debug)]
pub enum ProviderMessage {
    RouterAdded(LispRouterId),
    RouterRemoved(LispRouterId),
    RouterChanged(LispRouterId),
    Incoming {
        router: LispRouterId,
        message: Arc<dyn LispMessage>,
    },
    Outgoing {
        router: LispRouterId,
        message: Arc<dyn LispMessage>,
    },
    KnownRouters {
        response: mpsc::Sender<Vec<LispRouterId>>,
    },
}

/// Provider actor - translates incoming Map-Registers into mapping entries
pub struct ProviderActor {
    scheme: String,
    extensions: ExtensionRegistry,
    routers: HashSet<LispRouterId>,
    receiver: mpsc::Receiver<ProviderMessage>,
    output: mpsc::Sender<MappingEntry>,
}

impl ProviderActor {
    pub fn new(
        scheme: String,
        extensions: ExtensionRegistry,
        receiver: mpsc::Receiver<ProviderMessage>,
        output: mpsc::Sender<MappingEntry>,
    ) -> Self {
        Self {
            scheme,
            extensions,
            routers: HashSet::new(),
            receiver,
            output,
        }
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ProviderMessage::RouterAdded(router) => {
                    debug!(%router, "Router added");
                    self.routers.insert(router);
                }
                ProviderMessage::RouterRemoved(router) => {
                    debug!(%router, "Router removed");
                    self.routers.remove(&router);
                }
                ProviderMessage::RouterChanged(router) => {
                    debug!(%router, "Router changed");
                    self.routers.insert(router);
                }
                ProviderMessage::Incoming { router, message } => {
                    self.handle_incoming(router, message.as_ref()).await;
                }
                ProviderMessage::Outgoing { router, message } => {
                    debug!(%router, message_type = %message.message_type(), "Outgoing message");
                }
                ProviderMessage::KnownRouters { response } => {
                    let mut routers: Vec<_> = self.routers.iter().copied().collect();
                    routers.sort();
                    let _ = response.send(routers).await;
                }
            }
        }
        debug!("Provider actor exiting");
    }

    async fn handle_incoming(&self, router: LispRouterId, message: &dyn LispMessage) {
        if message.message_type() != LispType::MapRegister {
            debug!(%router, message_type = %message.message_type(), "Ignoring incoming message");
            return;
        }

        let device_id = router.device_id(&self.scheme);
        let translated = build_entries(&device_id, message.records(), &self.extensions);
        if !translated.is_clean() {
            debug!(
                device = %device_id,
                warnings = translated.warnings.len(),
                "Map-Register translated with warnings"
            );
        }

        for entry in translated.value {
            if self.output.send(entry).await.is_err() {
                warn!(device = %device_id, "Mapping entry receiver dropped");
                return;
            }
        }
    }
}

/// Listener registered with the controller on activation
///
/// Controller callbacks are synchronous, so events are queued with
/// `try_send`; an event is dropped with a warning when the queue is full.
struct ProviderListener {
    sender: mpsc::Sender<ProviderMessage>,
}

impl ProviderListener {
    fn forward(&self, msg: ProviderMessage) {
        if let Err(e) = self.sender.try_send(msg) {
            warn!("Dropping controller event: {}", e);
        }
    }
}

impl RouterListener for ProviderListener {
    fn router_added(&self, router: LispRouterId) {
        self.forward(ProviderMessage::RouterAdded(router));
    }

    fn router_removed(&self, router: LispRouterId) {
        self.forward(ProviderMessage::RouterRemoved(router));
    }

    fn router_changed(&self, router: LispRouterId) {
        self.forward(ProviderMessage::RouterChanged(router));
    }
}

impl MessageListener for ProviderListener {
    fn handle_incoming_message(&self, router: LispRouterId, message: Arc<dyn LispMessage>) {
        self.forward(ProviderMessage::Incoming { router, message });
    }

    fn handle_outgoing_message(&self, router: LispRouterId, message: Arc<dyn LispMessage>) {
        self.forward(ProviderMessage::Outgoing { router, message });
    }
}

/// Handle for an activated provider
struct Activation {
    sender: mpsc::Sender<ProviderMessage>,
    router_listener: Arc<dyn RouterListener>,
    message_listener: Arc<dyn MessageListener>,
}

/// Provider of mappings learned from LISP routers
pub struct LispMappingProvider {
    scheme: String,
    capacity: usize,
    extensions: ExtensionRegistry,
    activation: Option<Activation>,
}

impl LispMappingProvider {
    pub fn new(scheme: impl Into<String>, capacity: usize, extensions: ExtensionRegistry) -> Self {
        Self {
            scheme: scheme.into(),
            capacity: capacity.max(1),
            extensions,
            activation: None,
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn is_active(&self) -> bool {
        self.activation.is_some()
    }

    /// Registers with `controller` and starts the provider actor
    ///
    /// Returns the channel on which mapping entries are delivered. It closes
    /// once the provider is deactivated and every queued event is handled.
    /// Must be called from within a Tokio runtime.
    pub fn activate(
        &mut self,
        controller: &dyn LispController,
    ) -> Result<mpsc::Receiver<MappingEntry>, ProviderError> {
        if self.activation.is_some() {
            return Err(ProviderError::AlreadyActive);
        }

        let (tx, rx) = mpsc::channel(self.capacity);
        let (out_tx, out_rx) = mpsc::channel(self.capacity);

        let actor = ProviderActor::new(self.scheme.clone(), self.extensions.clone(), rx, out_tx);
        tokio::spawn(async move {
            actor.run().await;
        });

        let listener = Arc::new(ProviderListener { sender: tx.clone() });
        let router_listener: Arc<dyn RouterListener> = listener.clone();
        let message_listener: Arc<dyn MessageListener> = listener;
        controller.add_router_listener(router_listener.clone());
        controller.add_message_listener(message_listener.clone());

        self.activation = Some(Activation {
            sender: tx,
            router_listener,
            message_listener,
        });

        info!("Started");
        Ok(out_rx)
    }

    /// Unregisters from `controller` and lets the actor drain and stop
    pub fn deactivate(&mut self, controller: &dyn LispController) -> Result<(), ProviderError> {
        let activation = self.activation.take().ok_or(ProviderError::NotActive)?;

        controller.remove_router_listener(&activation.router_listener);
        controller.remove_message_listener(&activation.message_listener);

        info!("Stopped");
        Ok(())
    }

    /// Routers currently known to the provider, in address order
    pub async fn known_routers(&self) -> Result<Vec<LispRouterId>, ProviderError> {
        let activation = self.activation.as_ref().ok_or(ProviderError::NotActive)?;

        let (tx, mut rx) = mpsc::channel(1);
        activation
            .sender
            .send(ProviderMessage::KnownRouters { response: tx })
            .await
            .map_err(|_| ProviderError::ChannelClosed)?;

        rx.recv().await.ok_or(ProviderError::ChannelClosed)
    }
}

impl fmt::Debug for LispMappingProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LispMappingProvider")
            .field("scheme", &self.scheme)
            .field("capacity", &self.capacity)
            .field("extensions", &self.extensions)
            .field("active", &self.is_active())
            .finish()
    }
}

/// In-process controller that dispatches events to registered listeners
///
/// Used by the command line tool to feed messages read from files.
#[derive(Default)]
pub struct LocalController {
    router_listeners: Mutex<Vec<Arc<dyn RouterListener>>>,
    message_listeners: Mutex<Vec<Arc<dyn MessageListener>>>,
}

impl LocalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.router_listeners).len() + lock(&self.message_listeners).len()
    }

    pub fn connect_router(&self, router: LispRouterId) {
        for listener in lock(&self.router_listeners).iter() {
            listener.router_added(router);
        }
    }

    pub fn disconnect_router(&self, router: LispRouterId) {
        for listener in lock(&self.router_listeners).iter() {
            listener.router_removed(router);
        }
    }

    /// Delivers a message received from `router`
    pub fn receive(&self, router: LispRouterId, message: Arc<dyn LispMessage>) {
        for listener in lock(&self.message_listeners).iter() {
            listener.handle_incoming_message(router, message.clone());
        }
    }

    /// Reports a message sent to `router`
    pub fn send(&self, router: LispRouterId, message: Arc<dyn LispMessage>) {
        for listener in lock(&self.message_listeners).iter() {
            listener.handle_outgoing_message(router, message.clone());
        }
    }
}

impl LispController for LocalController {
    fn add_router_listener(&self, listener: Arc<dyn RouterListener>) {
        lock(&self.router_listeners).push(listener);
    }

    fn remove_router_listener(&self, listener: &Arc<dyn RouterListener>) {
        lock(&self.router_listeners).retain(|l| !Arc::ptr_eq(l, listener));
    }

    fn add_message_listener(&self, listener: Arc<dyn MessageListener>) {
        lock(&self.message_listeners).push(listener);
    }

    fn remove_message_listener(&self, listener: &Arc<dyn MessageListener>) {
        lock(&self.message_listeners).retain(|l| !Arc::ptr_eq(l, listener));
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
