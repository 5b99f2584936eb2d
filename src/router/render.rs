use super::params::{HiddenParams, Params};

/// Produces the output of a route from its parsed parameters.
pub trait Render<R> {
    fn render(&self, params: &Params, hidden: Option<HiddenParams>) -> R;
}

pub type BoxRender<R> = Box<dyn Render<R> + Send + Sync>;

impl<R> Render<R> for BoxRender<R> {
    fn render(&self, params: &Params, hidden: Option<HiddenParams>) -> R {
        Render::render(&**self, params, hidden)
    }
}

impl<R, F> Render<R> for F
where
    F: Fn(&Params, Option<HiddenParams>) -> R,
{
    fn render(&self, params: &Params, hidden: Option<HiddenParams>) -> R {
        (self)(params, hidden)
    }
}
