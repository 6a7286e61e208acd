//! Datasources and workbooks
//!
//! Both are listed the same way and decoded into `ListableItem`.

mod api;
mod models;

pub use models::{
    Datasource, DatasourceList, DatasourcesResponse, ListableItem, Workbook, WorkbookList,
    WorkbooksResponse,
};
