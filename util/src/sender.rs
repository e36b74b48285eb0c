#[cfg(feature = "alloc")]
mod sched_on;
#[cfg(feature = "alloc")]
mod transfer;
mod upon_done;
mod upon_error;

#[cfg(feature = "alloc")]
pub use self::{
    sched_on::{sched_on, SchedOn, SchedOnFn},
    transfer::{transfer, Transfer, TransferFn},
};
pub use self::{
    upon_done::{upon_done, UponDone, UponDoneFn},
    upon_error::{upon_error, UponError, UponErrorFn},
};
use sendex_core::{AdaptorClosure, Sender, Then, TryThen, WriteEnv};
#[cfg(feature = "alloc")]
use sendex_core::{AndThen, Scheduler};

pub trait SenderExt: Sender + Sized {
    fn pipe<C>(self, closure: C) -> C::Output
    where
        C: AdaptorClosure<Self>,
    {
        closure.apply(self)
    }

    fn then<F>(self, f: F) -> Then<Self, F> {
        self.pipe(sendex_core::then(f))
    }

    fn try_then<F>(self, f: F) -> TryThen<Self, F> {
        self.pipe(sendex_core::try_then(f))
    }

    #[cfg(feature = "alloc")]
    fn and_then<F>(self, f: F) -> AndThen<Self, F> {
        self.pipe(sendex_core::and_then(f))
    }

    fn upon_error<F>(self, f: F) -> UponError<Self, F> {
        self.pipe(upon_error(f))
    }

    fn upon_done<F>(self, f: F) -> UponDone<Self, F> {
        self.pipe(upon_done(f))
    }

    fn write_env<Env>(self, env: Env) -> WriteEnv<Self, Env> {
        self.pipe(sendex_core::write_env(env))
    }

    #[cfg(feature = "alloc")]
    fn transfer<Sched>(self, scheduler: Sched) -> Transfer<Self, Sched>
    where
        Sched: Scheduler,
    {
        self.pipe(transfer(scheduler))
    }

    #[cfg(feature = "alloc")]
    fn sched_on<Sched>(self, scheduler: Sched) -> SchedOn<Self, Sched>
    where
        Sched: Scheduler,
    {
        self.pipe(sched_on(scheduler))
    }
}

impl<S: Sender> SenderExt for S {}

#[cfg(feature = "alloc")]
#[macro_export]
macro_rules! exec {
    {@ $e:expr} => ($e);
    {$e:expr} => ($crate::just($e));
    {let $v:pat = @ $e:expr $(=> $ty:ty)?; $($t:tt)*} => {{
        let closure = move |$v $(: $ty)?| $crate::exec!($($t)*);
        $crate::sender::SenderExt::pipe($e, $crate::and_then(closure))
    }};
    {let $v:pat = $e:expr $(=> $ty:ty)?; $($t:tt)*} => {{
        let closure = move |$v $(: $ty)?| $crate::exec!($($t)*);
        $crate::sender::SenderExt::pipe($crate::just($e), $crate::and_then(closure))
    }};
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use sendex_core::{just, just_done, just_error, sync_wait};

    use super::SenderExt;

    #[test]
    fn method_chains_read_left_to_right() {
        let result = sync_wait(just((3, 4)).then(|(a, b): (i32, i32)| a + b).then(|x| x * x));
        assert_eq!(result.unwrap(), Some(49));
    }

    #[test]
    fn upon_error_recovers_into_a_value() {
        let result = sync_wait(just_error("boom").upon_error(|e: &str| e.len()));
        assert_eq!(result.unwrap(), Some(4));
    }

    #[test]
    fn upon_done_recovers_into_a_value() {
        let result = sync_wait(just_done().upon_done(|| 7));
        assert_eq!(result.unwrap(), Some(7));
    }

    #[test]
    fn do_notation_desugars_to_a_chain() {
        let pipeline = crate::exec! {
            let a = 2;
            let b = @ just(a + 3);
            let c = a * b;
            c + 1
        };
        assert_eq!(sync_wait(pipeline).unwrap(), Some(11));
    }
}
