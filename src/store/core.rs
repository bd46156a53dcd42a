use thiserror::Error;

/// 序列存储的错误类型
///
/// 标量存储的所有操作都不会失败，只有序列存储的下标、区间、长度操作会返回错误。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// key 从未设置过，或已被 clear 清除
    #[error("key does not exist")]
    KeyDoesNotExist,
    /// 下标不在 `[0, len)` 内，或区间端点不在 `[0, len]` 内
    #[error("index out of bounds")]
    IdxOutOfBounds,
}

/// 标量存储：每个 key 对应一个值
///
/// 所有操作都是原子的，并且不会失败。
pub trait ScalarStore<T>: Send + Sync
where
    T: Clone + Send + Sync,
{
    /// 设置 key 对应的值，已存在则覆盖
    fn set(&self, key: &str, value: T);

    /// 获取 key 对应的值，key 不存在时返回 None
    fn get(&self, key: &str) -> Option<T>;

    /// 当前 key 的数量（不是容量）
    fn size(&self) -> usize;

    /// 所有 key，顺序不确定
    fn members(&self) -> Vec<String>;

    fn is_member(&self, key: &str) -> bool;

    /// 清空所有 key 和值
    fn clear(&self);
}

/// 序列存储：每个 key 对应一个有序、变长的序列
///
/// 下标和区间访问都带有边界检查，边界检查与读写在同一把锁内完成。
/// 区间均为左闭右开 `[lower, upper)`。
pub trait SeriesStore<T>: Send + Sync
where
    T: Clone + Send + Sync,
{
    /// 用整个序列替换 key 对应的序列，key 不存在则创建
    fn set(&self, key: &str, series: Vec<T>);

    /// 覆盖 key 对应序列中下标为 idx 的元素，序列长度不变
    fn set_idx(&self, key: &str, idx: isize, value: T) -> Result<(), StoreError>;

    /// 获取 key 对应序列的快照，key 不存在时返回 None
    fn get(&self, key: &str) -> Option<Vec<T>>;

    /// 获取 key 对应序列中下标为 idx 的元素
    fn get_idx(&self, key: &str, idx: isize) -> Result<T, StoreError>;

    /// 获取 key 对应序列 `[lower, upper)` 区间的快照
    ///
    /// `lower > upper` 视为越界，返回 [`StoreError::IdxOutOfBounds`]。
    fn get_range(&self, key: &str, lower: isize, upper: isize) -> Result<Vec<T>, StoreError>;

    /// 当前 key 的数量（不是所有序列的元素总数）
    fn size(&self) -> usize;

    /// 所有 key，顺序不确定
    fn members(&self) -> Vec<String>;

    fn is_member(&self, key: &str) -> bool;

    /// key 对应序列的长度
    fn member_len(&self, key: &str) -> Result<usize, StoreError>;

    /// 清空所有 key 和序列
    fn clear(&self);
}

/// 检查元素下标，合法范围为 `[0, len)`
pub(crate) fn check_idx(idx: isize, len: usize) -> Result<usize, StoreError> {
    usize::try_from(idx)
        .ok()
        .filter(|&i| i < len)
        .ok_or(StoreError::IdxOutOfBounds)
}

/// 检查区间端点，合法范围为 `[0, len]`，且 `lower <= upper`
pub(crate) fn check_range(
    lower: isize,
    upper: isize,
    len: usize,
) -> Result<(usize, usize), StoreError> {
    let bound = |b: isize| {
        usize::try_from(b)
            .ok()
            .filter(|&i| i <= len)
            .ok_or(StoreError::IdxOutOfBounds)
    };

    let (lower, upper) = (bound(lower)?, bound(upper)?);
    if lower > upper {
        return Err(StoreError::IdxOutOfBounds);
    }

    Ok((lower, upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_idx() {
        assert_eq!(check_idx(0, 5), Ok(0));
        assert_eq!(check_idx(4, 5), Ok(4));
        assert_eq!(check_idx(5, 5), Err(StoreError::IdxOutOfBounds));
        assert_eq!(check_idx(-1, 5), Err(StoreError::IdxOutOfBounds));
        assert_eq!(check_idx(isize::MIN, 5), Err(StoreError::IdxOutOfBounds));

        // 空序列没有合法下标
        assert_eq!(check_idx(0, 0), Err(StoreError::IdxOutOfBounds));
    }

    #[test]
    fn test_check_range() {
        assert_eq!(check_range(0, 5, 5), Ok((0, 5)));
        assert_eq!(check_range(1, 3, 5), Ok((1, 3)));
        assert_eq!(check_range(5, 5, 5), Ok((5, 5)));
        assert_eq!(check_range(0, 0, 0), Ok((0, 0)));

        // 端点越界
        assert_eq!(check_range(-1, 5, 5), Err(StoreError::IdxOutOfBounds));
        assert_eq!(check_range(0, 6, 5), Err(StoreError::IdxOutOfBounds));
        assert_eq!(check_range(6, 6, 5), Err(StoreError::IdxOutOfBounds));
        assert_eq!(check_range(0, -1, 5), Err(StoreError::IdxOutOfBounds));

        // 反向区间
        assert_eq!(check_range(3, 1, 5), Err(StoreError::IdxOutOfBounds));
    }

    #[test]
    fn test_store_error_display() {
        assert_eq!(StoreError::KeyDoesNotExist.to_string(), "key does not exist");
        assert_eq!(StoreError::IdxOutOfBounds.to_string(), "index out of bounds");
    }
}
