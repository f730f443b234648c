use thiserror::Error;

use crate::effect::EffectConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    #[error("Background container is not available")]
    ContainerUnavailable,
    #[error("Rendering context could not be acquired")]
    ContextUnavailable,
    #[error("Couldn't attach input listener: {0}")]
    Listener(String),
    #[error("Couldn't schedule animation frame: {0}")]
    Scheduler(String),
}

/// A generative animated background that can be bound to a container.
///
/// `create` must either return a live handle or release everything it
/// acquired before returning the error.
pub trait BackgroundEffect {
    type Container;
    type Handle;

    fn create(
        &self,
        container: &Self::Container,
        config: &EffectConfig,
    ) -> Result<Self::Handle, EffectError>;

    fn destroy(&self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectPhase {
    Unmounted,
    Mounting,
    Active,
    Unmounting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountOutcome {
    Created,
    AlreadyActive,
    Degraded(EffectError),
}

/// Owns the single live handle of a background effect for one container.
///
/// Dropping the controller releases the handle, so the effect can't outlive
/// whatever owns the controller.
pub struct EffectController<E: BackgroundEffect> {
    effect: E,
    config: EffectConfig,
    phase: EffectPhase,
    handle: Option<E::Handle>,
}

impl<E: BackgroundEffect> EffectController<E> {
    pub fn new(effect: E, config: EffectConfig) -> Self {
        Self {
            effect,
            config,
            phase: EffectPhase::Unmounted,
            handle: None,
        }
    }

    pub fn phase(&self) -> EffectPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn mount(&mut self, container: &E::Container) -> MountOutcome {
        if self.is_active() {
            return MountOutcome::AlreadyActive;
        }

        self.phase = EffectPhase::Mounting;
        match self.effect.create(container, &self.config) {
            Ok(handle) => {
                self.handle = Some(handle);
                self.phase = EffectPhase::Active;
                MountOutcome::Created
            }
            Err(e) => {
                self.phase = EffectPhase::Unmounted;
                MountOutcome::Degraded(e)
            }
        }
    }

    /// Release the live handle, if any. Returns `false` when there was nothing to release.
    pub fn unmount(&mut self) -> bool {
        let Some(handle) = self.handle.take() else {
            return false;
        };
        self.phase = EffectPhase::Unmounting;
        self.effect.destroy(handle);
        self.phase = EffectPhase::Unmounted;
        true
    }
}

impl<E: BackgroundEffect> Drop for EffectController<E> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counters {
        live: Cell<i32>,
        created: Cell<u32>,
        destroyed: Cell<u32>,
    }

    struct FakeEffect {
        counters: Rc<Counters>,
        fail_with: Option<EffectError>,
    }

    struct FakeHandle;

    impl FakeEffect {
        fn new(counters: Rc<Counters>) -> Self {
            Self {
                counters,
                fail_with: None,
            }
        }

        fn failing(counters: Rc<Counters>, err: EffectError) -> Self {
            Self {
                counters,
                fail_with: Some(err),
            }
        }
    }

    impl BackgroundEffect for FakeEffect {
        type Container = bool;
        type Handle = FakeHandle;

        fn create(&self, container: &bool, _config: &EffectConfig) -> Result<FakeHandle, EffectError> {
            if !*container {
                return Err(EffectError::ContainerUnavailable);
            }
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            self.counters.live.set(self.counters.live.get() + 1);
            self.counters.created.set(self.counters.created.get() + 1);
            Ok(FakeHandle)
        }

        fn destroy(&self, _handle: FakeHandle) {
            self.counters.live.set(self.counters.live.get() - 1);
            self.counters.destroyed.set(self.counters.destroyed.get() + 1);
        }
    }

    fn controller(counters: &Rc<Counters>) -> EffectController<FakeEffect> {
        EffectController::new(FakeEffect::new(Rc::clone(counters)), EffectConfig::hero())
    }

    #[test]
    fn test_mount_creates_single_handle() {
        let counters = Rc::new(Counters::default());
        let mut ctrl = controller(&counters);
        assert_eq!(ctrl.phase(), EffectPhase::Unmounted);

        assert_eq!(ctrl.mount(&true), MountOutcome::Created);
        assert_eq!(ctrl.phase(), EffectPhase::Active);
        assert!(ctrl.is_active());
        assert_eq!(counters.live.get(), 1);
    }

    #[test]
    fn test_repeated_mount_is_idempotent() {
        let counters = Rc::new(Counters::default());
        let mut ctrl = controller(&counters);

        assert_eq!(ctrl.mount(&true), MountOutcome::Created);
        assert_eq!(ctrl.mount(&true), MountOutcome::AlreadyActive);
        assert_eq!(ctrl.mount(&true), MountOutcome::AlreadyActive);

        assert_eq!(counters.created.get(), 1);
        assert_eq!(counters.live.get(), 1);
    }

    #[test]
    fn test_round_trip_is_leak_free() {
        let counters = Rc::new(Counters::default());
        let mut ctrl = controller(&counters);

        ctrl.mount(&true);
        assert!(ctrl.unmount());
        assert_eq!(ctrl.phase(), EffectPhase::Unmounted);
        assert!(!ctrl.is_active());
        assert_eq!(counters.live.get(), 0);
        assert_eq!(counters.destroyed.get(), 1);
    }

    #[test]
    fn test_unmount_is_idempotent() {
        let counters = Rc::new(Counters::default());
        let mut ctrl = controller(&counters);

        // Never created
        assert!(!ctrl.unmount());

        ctrl.mount(&true);
        assert!(ctrl.unmount());
        assert!(!ctrl.unmount());
        assert_eq!(counters.destroyed.get(), 1);
        assert_eq!(counters.live.get(), 0);
    }

    #[test]
    fn test_drop_releases_handle() {
        let counters = Rc::new(Counters::default());
        {
            let mut ctrl = controller(&counters);
            ctrl.mount(&true);
            assert_eq!(counters.live.get(), 1);
        }
        assert_eq!(counters.live.get(), 0);
        assert_eq!(counters.destroyed.get(), 1);
    }

    #[test]
    fn test_drop_after_unmount_does_not_double_release() {
        let counters = Rc::new(Counters::default());
        {
            let mut ctrl = controller(&counters);
            ctrl.mount(&true);
            ctrl.unmount();
        }
        assert_eq!(counters.destroyed.get(), 1);
    }

    #[test]
    fn test_context_failure_degrades() {
        let counters = Rc::new(Counters::default());
        let mut ctrl = EffectController::new(
            FakeEffect::failing(Rc::clone(&counters), EffectError::ContextUnavailable),
            EffectConfig::hero(),
        );

        assert_eq!(
            ctrl.mount(&true),
            MountOutcome::Degraded(EffectError::ContextUnavailable)
        );
        assert_eq!(ctrl.phase(), EffectPhase::Unmounted);
        assert!(!ctrl.is_active());
        assert!(!ctrl.unmount());
        assert_eq!(counters.live.get(), 0);
    }

    #[test]
    fn test_missing_container_degrades() {
        let counters = Rc::new(Counters::default());
        let mut ctrl = controller(&counters);
        assert_eq!(
            ctrl.mount(&false),
            MountOutcome::Degraded(EffectError::ContainerUnavailable)
        );
        assert_eq!(counters.created.get(), 0);
    }

    #[test]
    fn test_fresh_cycle_after_unmount() {
        let counters = Rc::new(Counters::default());
        let mut ctrl = controller(&counters);

        ctrl.mount(&true);
        ctrl.unmount();
        assert_eq!(ctrl.mount(&true), MountOutcome::Created);
        assert_eq!(counters.created.get(), 2);
        assert_eq!(counters.live.get(), 1);
    }
}
