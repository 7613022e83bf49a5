//! 抽题服务 - 业务能力层
//!
//! 只负责"从题库中不放回地抽 N 道题"，不关心排版

use crate::error::SampleError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// 默认随机种子，保证多次运行抽到同样的题目、同样的顺序
pub const DEFAULT_SEED: u64 = 12345;

/// 确定性抽题器
///
/// 同一个 `(题库顺序, n, seed)` 总是得到同一个结果
#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    seed: u64,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// 不放回地抽取 `n` 条记录，输出顺序即随机顺序
    ///
    /// # 错误
    /// `n` 大于题库数量时返回 `InsufficientPool`，不会截断或重复
    pub fn sample<T: Clone>(&self, pool: &[T], n: usize) -> Result<Vec<T>, SampleError> {
        if n > pool.len() {
            return Err(SampleError::InsufficientPool {
                requested: n,
                available: pool.len(),
            });
        }

        // 每次调用都从种子重新初始化
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let picked = rand::seq::index::sample(&mut rng, pool.len(), n);

        Ok(picked.into_iter().map(|i| pool[i].clone()).collect())
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// 便捷函数：`Sampler::new(seed).sample(pool, n)`
pub fn sample<T: Clone>(pool: &[T], n: usize, seed: u64) -> Result<Vec<T>, SampleError> {
    Sampler::new(seed).sample(pool, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pool(len: usize) -> Vec<String> {
        (0..len).map(|i| format!("question {i}")).collect()
    }

    #[test]
    fn test_sample_size_and_uniqueness() {
        let pool = pool(50);
        for n in [0, 1, 7, 25, 49, 50] {
            let picked = sample(&pool, n, DEFAULT_SEED).unwrap();
            assert_eq!(picked.len(), n);

            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), n, "n={n} 出现重复");
            assert!(picked.iter().all(|p| pool.contains(p)));
        }
    }

    #[test]
    fn test_sample_is_deterministic() {
        let pool = pool(100);
        let first = sample(&pool, 80, DEFAULT_SEED).unwrap();
        let second = sample(&pool, 80, DEFAULT_SEED).unwrap();
        assert_eq!(first, second);

        // 同一个 Sampler 多次调用也一致
        let sampler = Sampler::default();
        assert_eq!(sampler.sample(&pool, 80).unwrap(), first);
    }

    #[test]
    fn test_sample_follows_chacha8_stream() {
        // 结果只取决于 ChaCha8 序列，不随 rand 的 StdRng 实现变化
        let pool = pool(100);
        let mut rng = ChaCha8Rng::seed_from_u64(DEFAULT_SEED);
        let expected: Vec<String> = rand::seq::index::sample(&mut rng, pool.len(), 12)
            .into_iter()
            .map(|i| pool[i].clone())
            .collect();
        assert_eq!(sample(&pool, 12, DEFAULT_SEED).unwrap(), expected);
    }

    #[test]
    fn test_different_seed_changes_selection() {
        let pool = pool(100);
        let a = sample(&pool, 20, 1).unwrap();
        let b = sample(&pool, 20, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_sample_zero_is_empty() {
        let picked = sample(&pool(3), 0, DEFAULT_SEED).unwrap();
        assert!(picked.is_empty());

        let empty: Vec<String> = Vec::new();
        assert!(sample(&empty, 0, DEFAULT_SEED).unwrap().is_empty());
    }

    #[test]
    fn test_sample_insufficient_pool() {
        let err = sample(&pool(2), 3, DEFAULT_SEED).unwrap_err();
        assert_eq!(
            err,
            SampleError::InsufficientPool {
                requested: 3,
                available: 2
            }
        );
    }

    #[test]
    fn test_full_sample_is_permutation() {
        let pool = pool(10);
        let mut picked = sample(&pool, 10, DEFAULT_SEED).unwrap();
        picked.sort();
        let mut expected = pool.clone();
        expected.sort();
        assert_eq!(picked, expected);
    }
}
