use std::fmt::Debug;
use swingout_infra::ListingsContext;
use tracing::error;

/// Subscriber is a side effect to a `UseCase`
///
/// It is going to act upon the response of the execution
/// of the `UseCase` if the execution was a success.
pub trait Subscriber<U: UseCase> {
    fn notify(&self, e: &U::Response, ctx: &ListingsContext);
}

pub trait UseCase: Debug {
    type Response;
    type Error;

    const NAME: &'static str;

    fn execute(&mut self, ctx: &ListingsContext) -> Result<Self::Response, Self::Error>;

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>>
    where
        Self: Sized,
    {
        Default::default()
    }
}

#[tracing::instrument(name = "Executing usecase", skip(usecase, ctx), fields(usecase = U::NAME))]
pub fn execute<U>(mut usecase: U, ctx: &ListingsContext) -> Result<U::Response, U::Error>
where
    U: UseCase,
    U::Error: Debug,
{
    let res = usecase.execute(ctx);

    match &res {
        Ok(res) => {
            for subscriber in U::subscribers() {
                subscriber.notify(res, ctx);
            }
        }
        Err(e) => {
            error!("Use case error: {:?}", e);
        }
    }

    res
}
