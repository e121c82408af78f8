//! 페이지 캐시 무효화 훅
//!
//! 변경 작업(생성/수정/삭제) 후 영향을 받는 화면 경로를 기록합니다.
//! 경로별 세대(generation) 번호를 올려서, 렌더링 계층이 다음 요청에서
//! 변경 사항을 반영해야 함을 알 수 있게 합니다. 데이터 자체는 캐싱하지 않습니다.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

#[derive(Clone, Default)]
pub struct Revalidator {
    generations: Arc<RwLock<HashMap<String, u64>>>,
}

impl Revalidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 경로 하나를 무효화하고 새 세대 번호를 반환
    pub fn revalidate_path(&self, path: &str) -> u64 {
        let mut generations = match self.generations.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let generation = generations.entry(path.to_string()).or_insert(0);
        *generation += 1;

        debug!(path = %path, generation = *generation, "page cache invalidated");
        *generation
    }

    pub fn revalidate_paths<'a>(&self, paths: impl IntoIterator<Item = &'a str>) {
        for path in paths {
            self.revalidate_path(path);
        }
    }

    /// 현재 세대 번호 (한 번도 무효화되지 않은 경로는 0)
    pub fn generation(&self, path: &str) -> u64 {
        let generations = match self.generations.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        generations.get(path).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_unvisited_paths_at_zero() {
        let revalidator = Revalidator::new();

        assert_eq!(revalidator.generation("/hold"), 0);
    }

    #[test]
    fn should_bump_generation_per_path() {
        let revalidator = Revalidator::new();

        revalidator.revalidate_path("/hold");
        revalidator.revalidate_paths(["/hold", "/hold/1"]);

        assert_eq!(revalidator.generation("/hold"), 2);
        assert_eq!(revalidator.generation("/hold/1"), 1);
    }

    #[test]
    fn should_share_state_between_clones() {
        let revalidator = Revalidator::new();
        let clone = revalidator.clone();

        clone.revalidate_path("/traening");

        assert_eq!(revalidator.generation("/traening"), 1);
    }
}
