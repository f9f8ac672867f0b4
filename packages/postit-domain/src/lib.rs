pub mod links;
pub mod paging;
