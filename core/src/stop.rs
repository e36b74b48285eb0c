/// A cancellation-observation handle. Cancellation is cooperative: a
/// producer polls its receiver's token at its own waiting boundaries.
pub trait StopToken: Clone {
    fn stop_requested(&self) -> bool;

    fn stop_possible(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeverStopToken;

impl StopToken for NeverStopToken {
    fn stop_requested(&self) -> bool {
        false
    }

    fn stop_possible(&self) -> bool {
        false
    }
}

#[cfg(feature = "alloc")]
pub use self::shared::{SharedStopToken, StopSource};

#[cfg(feature = "alloc")]
mod shared {
    use alloc::sync::Arc;
    use core::sync::atomic::{
        AtomicBool,
        Ordering::{AcqRel, Acquire},
    };

    use super::StopToken;

    #[derive(Debug, Clone, Default)]
    pub struct StopSource {
        flag: Arc<AtomicBool>,
    }

    impl StopSource {
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns `true` if this call made the transition.
        pub fn request_stop(&self) -> bool {
            !self.flag.swap(true, AcqRel)
        }

        pub fn stop_requested(&self) -> bool {
            self.flag.load(Acquire)
        }

        pub fn token(&self) -> SharedStopToken {
            SharedStopToken {
                flag: self.flag.clone(),
            }
        }
    }

    #[derive(Debug, Clone)]
    pub struct SharedStopToken {
        flag: Arc<AtomicBool>,
    }

    impl StopToken for SharedStopToken {
        fn stop_requested(&self) -> bool {
            self.flag.load(Acquire)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_token_never_stops() {
        let token = NeverStopToken;
        assert!(!token.stop_requested());
        assert!(!token.stop_possible());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn shared_token_observes_request() {
        let source = StopSource::new();
        let token = source.token();
        assert!(token.stop_possible());
        assert!(!token.stop_requested());

        assert!(source.request_stop());
        assert!(!source.request_stop());
        assert!(token.stop_requested());
        assert!(token.clone().stop_requested());
    }
}
