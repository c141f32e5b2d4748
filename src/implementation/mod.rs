/*!
Semi-private stuff that you usually don't need to access directly
 */

pub mod algorithm;
pub mod tables_wrapper;

mod aux_tables;
mod case_data;
mod density_caching;
