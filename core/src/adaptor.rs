//! Adapter receivers override the channels they care about and forward the
//! rest, including the environment, to the wrapped receiver; [`Forward`]
//! overrides nothing.

use crate::traits::{Receiver, ReceiverOf, ReceiverOfError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Forward<R>(pub R);

impl<R: Receiver> Receiver for Forward<R> {
    type Env = R::Env;

    fn env(&self) -> &R::Env {
        self.0.env()
    }

    fn set_done(self) {
        self.0.set_done()
    }
}

impl<R, E> ReceiverOfError<E> for Forward<R>
where
    R: ReceiverOfError<E>,
{
    fn set_error(self, error: E) {
        self.0.set_error(error)
    }
}

impl<R, T> ReceiverOf<T> for Forward<R>
where
    R: ReceiverOf<T>,
{
    fn set_value(self, value: T) {
        self.0.set_value(value)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::{
        env::{get_stop_token, StopEnv},
        stop::{NeverStopToken, StopToken},
        traits::Signal,
    };

    struct Recording<'a> {
        slot: &'a Cell<Option<Signal<i32, &'static str>>>,
        env: StopEnv<NeverStopToken>,
    }

    impl Receiver for Recording<'_> {
        type Env = StopEnv<NeverStopToken>;

        fn env(&self) -> &Self::Env {
            &self.env
        }

        fn set_done(self) {
            self.slot.set(Some(Signal::Done));
        }
    }

    impl ReceiverOfError<&'static str> for Recording<'_> {
        fn set_error(self, error: &'static str) {
            self.slot.set(Some(Signal::Error(error)));
        }
    }

    impl ReceiverOf<i32> for Recording<'_> {
        fn set_value(self, value: i32) {
            self.slot.set(Some(Signal::Value(value)));
        }
    }

    #[test]
    fn channels_pass_through_unchanged() {
        let slot = Cell::new(None);
        let recv = |slot| Recording {
            slot,
            env: StopEnv(NeverStopToken),
        };

        Forward(recv(&slot)).set_value(5);
        assert_eq!(slot.take(), Some(Signal::Value(5)));

        Forward(recv(&slot)).set_error("boom");
        assert_eq!(slot.take(), Some(Signal::Error("boom")));

        Forward(recv(&slot)).set_done();
        assert_eq!(slot.take(), Some(Signal::Done));
    }

    #[test]
    fn queries_pass_through_unchanged() {
        let slot = Cell::new(None);
        let wrapped = Forward(Recording {
            slot: &slot,
            env: StopEnv(NeverStopToken),
        });
        assert!(!get_stop_token(&wrapped).stop_possible());
    }
}
