//! CMM Prediction Model - Desktop GUI Application
//!
//! A desktop front end for the cardiometabolic multimorbidity prediction
//! pipeline: a covariate form feeding the pre-trained survival forest and
//! rendering the cumulative-incidence summary and curve.

pub mod app;
pub mod state;
pub mod theme;
pub mod views;
