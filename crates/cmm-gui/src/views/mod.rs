mod form;
mod results;

pub use form::FormView;
pub use results::ResultsView;
