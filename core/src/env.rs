use crate::{
    stop::{NeverStopToken, StopToken},
    traits::{Receiver, Scheduler},
};

/// The ambient context a receiver exposes. `()` is the empty environment:
/// no scheduler, no allocator, a never-stopping token.
pub trait Environment {
    type StopToken: StopToken;

    fn stop_token(&self) -> Self::StopToken;
}

impl Environment for () {
    type StopToken = NeverStopToken;

    fn stop_token(&self) -> NeverStopToken {
        NeverStopToken
    }
}

pub trait ProvidesScheduler: Environment {
    type Scheduler: Scheduler;

    fn scheduler(&self) -> Self::Scheduler;
}

pub trait ProvidesAllocator: Environment {
    type Allocator: Clone;

    fn allocator(&self) -> Self::Allocator;
}

pub fn get_stop_token<R: Receiver>(receiver: &R) -> <R::Env as Environment>::StopToken {
    receiver.env().stop_token()
}

pub fn get_scheduler<R>(receiver: &R) -> <R::Env as ProvidesScheduler>::Scheduler
where
    R: Receiver,
    R::Env: ProvidesScheduler,
{
    receiver.env().scheduler()
}

pub fn get_allocator<R>(receiver: &R) -> <R::Env as ProvidesAllocator>::Allocator
where
    R: Receiver,
    R::Env: ProvidesAllocator,
{
    receiver.env().allocator()
}

/// An environment consisting of a single stop token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StopEnv<T>(pub T);

impl<T: StopToken> Environment for StopEnv<T> {
    type StopToken = T;

    fn stop_token(&self) -> T {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl Receiver for Plain {
        type Env = ();

        fn env(&self) -> &() {
            &()
        }

        fn set_done(self) {}
    }

    #[test]
    fn missing_stop_query_yields_never_token() {
        let token = get_stop_token(&Plain);
        assert!(!token.stop_requested());
        assert!(!token.stop_possible());
    }

    #[derive(Clone, PartialEq, Eq, Debug)]
    struct Bump;

    struct WithAlloc;

    impl Environment for WithAlloc {
        type StopToken = NeverStopToken;

        fn stop_token(&self) -> NeverStopToken {
            NeverStopToken
        }
    }

    impl ProvidesAllocator for WithAlloc {
        type Allocator = Bump;

        fn allocator(&self) -> Bump {
            Bump
        }
    }

    struct Allocating;

    impl Receiver for Allocating {
        type Env = WithAlloc;

        fn env(&self) -> &WithAlloc {
            &WithAlloc
        }

        fn set_done(self) {}
    }

    #[test]
    fn provided_allocator_is_returned() {
        assert_eq!(get_allocator(&Allocating), Bump);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn stop_env_hands_out_its_token() {
        let source = crate::stop::StopSource::new();
        let env = StopEnv(source.token());
        source.request_stop();
        assert!(env.stop_token().stop_requested());
    }
}
