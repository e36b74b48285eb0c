use crate::{
    env::Environment,
    pipe::AdaptorClosure,
    traits::{Receiver, ReceiverOf, ReceiverOfError, Sender, SenderTo, TypedSender},
};

/// The wrapped sender's receiver answers its queries from `env`;
/// completions pass through untouched.
pub const fn write_env<Env>(env: Env) -> WriteEnvFn<Env> {
    WriteEnvFn(env)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteEnvFn<Env>(Env);

impl<S, Env> AdaptorClosure<S> for WriteEnvFn<Env>
where
    S: Sender,
{
    type Output = WriteEnv<S, Env>;

    fn apply(self, sender: S) -> WriteEnv<S, Env> {
        WriteEnv { sender, env: self.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteEnv<S, Env> {
    sender: S,
    env: Env,
}

impl<S: Sender, Env> Sender for WriteEnv<S, Env> {}

impl<S, Env> TypedSender for WriteEnv<S, Env>
where
    S: TypedSender,
{
    type Output = S::Output;
    type Error = S::Error;

    const SENDS_DONE: bool = S::SENDS_DONE;
}

impl<S, Env, R> SenderTo<R> for WriteEnv<S, Env>
where
    S: SenderTo<Recv<R, Env>>,
{
    type Operation = S::Operation;

    fn connect(self, receiver: R) -> S::Operation {
        self.sender.connect(Recv {
            receiver,
            env: self.env,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recv<R, Env> {
    receiver: R,
    env: Env,
}

impl<R, Env> Receiver for Recv<R, Env>
where
    R: Receiver,
    Env: Environment,
{
    type Env = Env;

    fn env(&self) -> &Env {
        &self.env
    }

    fn set_done(self) {
        self.receiver.set_done()
    }
}

impl<R, Env, E> ReceiverOfError<E> for Recv<R, Env>
where
    R: ReceiverOfError<E>,
    Env: Environment,
{
    fn set_error(self, error: E) {
        self.receiver.set_error(error)
    }
}

impl<R, Env, T> ReceiverOf<T> for Recv<R, Env>
where
    R: ReceiverOf<T>,
    Env: Environment,
{
    fn set_value(self, value: T) {
        self.receiver.set_value(value)
    }
}

crate::impl_pipe!(impl [S, Env,] WriteEnv<S, Env>);
crate::impl_compose!(impl [Env,] WriteEnvFn<Env>);
