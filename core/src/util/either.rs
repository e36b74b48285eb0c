use core::pin::Pin;

use either::Either;
use pin_project::pin_project;

use crate::traits::{OperationState, Sender, SenderTo, TypedSender};

/// `Either` of two same-shaped senders is a sender, so a pipeline can
/// branch at composition time.
impl<L: Sender, R: Sender> Sender for Either<L, R> {}

impl<L, R> TypedSender for Either<L, R>
where
    L: TypedSender,
    R: TypedSender<Output = L::Output, Error = L::Error>,
{
    type Output = L::Output;
    type Error = L::Error;

    const SENDS_DONE: bool = L::SENDS_DONE || R::SENDS_DONE;
}

impl<L, R, Recv> SenderTo<Recv> for Either<L, R>
where
    L: SenderTo<Recv>,
    R: SenderTo<Recv>,
{
    type Operation = EitherOp<L::Operation, R::Operation>;

    fn connect(self, receiver: Recv) -> Self::Operation {
        match self {
            Either::Left(sender) => EitherOp::Left(sender.connect(receiver)),
            Either::Right(sender) => EitherOp::Right(sender.connect(receiver)),
        }
    }
}

#[pin_project(project = EitherOpProj)]
pub enum EitherOp<A, B> {
    Left(#[pin] A),
    Right(#[pin] B),
}

impl<A, B> OperationState for EitherOp<A, B>
where
    A: OperationState,
    B: OperationState,
{
    fn start(self: Pin<&mut Self>) {
        match self.project() {
            EitherOpProj::Left(op) => op.start(),
            EitherOpProj::Right(op) => op.start(),
        }
    }
}
