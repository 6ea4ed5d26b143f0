use crate::utils::error::Result;
use chrono::NaiveDate;

/// 可以從日期建立、並能告訴區間產生器自己涵蓋到哪一天的週實體
pub trait WeekEntity: Sized {
    fn from_date(date: NaiveDate) -> Result<Self>;

    /// 區間產生器從這一天的隔天建立下一個實體
    fn last_covered_date(&self) -> NaiveDate;
}
