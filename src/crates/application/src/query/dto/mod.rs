pub mod artist;
pub mod show;
pub mod venue;

use serde::Serialize;

/// 搜索结果信封：数量 + 基础投影列表
#[derive(Debug, Serialize)]
pub struct SearchResultsDto<T: Serialize> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> SearchResultsDto<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
