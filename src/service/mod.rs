//! RecordService: typed queries and mutations over the record tables.

mod crud;
pub use crud::RecordService;
