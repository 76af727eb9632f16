//! Result categorizer - partitions a ranked match list into display buckets / 结果分类器
//!
//! Architecture principle: pure functions over plain data, no control flow /
//! 架构原则：纯函数，不控制流程
//! - categorize: partition one result set / 划分一个结果集
//! - CategoryBuckets: the partitioned view / 划分后的视图

use serde::{Deserialize, Serialize};

/// Number of items each bucket receives in the large band / 大结果集每个分类的条数
const WINDOW_SIZE: usize = 6;
/// Upper bound (exclusive) of the small band / 小结果集上界（不含）
const SMALL_BAND_MAX: usize = 9;
/// Lower bound (exclusive) of the large band / 大结果集下界（不含）
const LARGE_BAND_MIN: usize = 24;

/// Display category / 显示分类
///
/// Closed set so match arms stay exhaustive; `Total` is always available
/// and cannot be hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Total,
    Chats,
    Files,
    People,
    List,
}

impl Category {
    /// All categories that can be toggled as tabs / 可切换显示的分类
    pub const TOGGLEABLE: [Category; 4] = [
        Category::Files,
        Category::People,
        Category::Chats,
        Category::List,
    ];
}

/// A single search hit from the remote source / 单条远程搜索结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordMatch {
    pub word: String,
    pub score: f64,
}

/// A match tagged with the category it is rendered under / 带分类标签的结果
#[derive(Debug, Clone, PartialEq)]
pub struct CategorizedMatch {
    pub word: String,
    pub score: f64,
    pub category: Category,
}

impl CategorizedMatch {
    fn tag(m: &WordMatch, category: Category) -> Self {
        Self {
            word: m.word.clone(),
            score: m.score,
            category,
        }
    }
}

fn tag_all(items: &[WordMatch], category: Category) -> Vec<CategorizedMatch> {
    items
        .iter()
        .map(|m| CategorizedMatch::tag(m, category))
        .collect()
}

/// Per-category item counts, for rendering tab badges / 每个分类的条数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub total: usize,
    pub chats: usize,
    pub files: usize,
    pub people: usize,
    pub list: usize,
}

/// One bucket of ordered matches per category, recomputed wholesale on
/// every new result set / 每个分类一个有序桶，每次结果集整体重算
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBuckets {
    pub total: Vec<CategorizedMatch>,
    pub chats: Vec<CategorizedMatch>,
    pub files: Vec<CategorizedMatch>,
    pub people: Vec<CategorizedMatch>,
    pub list: Vec<CategorizedMatch>,
}

impl CategoryBuckets {
    /// Matches rendered for one category / 某个分类下渲染的结果
    pub fn bucket(&self, category: Category) -> &[CategorizedMatch] {
        match category {
            Category::Total => &self.total,
            Category::Chats => &self.chats,
            Category::Files => &self.files,
            Category::People => &self.people,
            Category::List => &self.list,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.bucket(category).len()
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            total: self.total.len(),
            chats: self.chats.len(),
            files: self.files.len(),
            people: self.people.len(),
            list: self.list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Partition a ranked result list into category buckets / 将有序结果划分到分类桶
///
/// Three size bands, first match wins: / 三个区间，先匹配者生效
/// - fewer than 9 items: the whole list is duplicated into both `people`
///   and `files` (deliberate duplication, not a bug) / 少于9条时整表同时进
///   people 和 files
/// - more than 24 items: six items per bucket in rank order
///   (chats, files, people, list); the rest only appears in `total`
/// - otherwise: split files:chats:people at a 1:2:3 ratio of the length,
///   remainder absorbed by `people` so nothing is lost to rounding
///
/// `total` always carries the full input. Rank order is preserved inside
/// every bucket.
pub fn categorize(data: &[WordMatch]) -> CategoryBuckets {
    let n = data.len();
    let mut buckets = CategoryBuckets {
        total: tag_all(data, Category::Total),
        ..Default::default()
    };

    if n < SMALL_BAND_MAX {
        buckets.people = tag_all(data, Category::People);
        buckets.files = tag_all(data, Category::Files);
    } else if n > LARGE_BAND_MIN {
        buckets.chats = tag_all(&data[..WINDOW_SIZE], Category::Chats);
        buckets.files = tag_all(&data[WINDOW_SIZE..WINDOW_SIZE * 2], Category::Files);
        buckets.people = tag_all(&data[WINDOW_SIZE * 2..WINDOW_SIZE * 3], Category::People);
        buckets.list = tag_all(&data[WINDOW_SIZE * 3..WINDOW_SIZE * 4], Category::List);
    } else {
        // 1:2:3 of the six ratio parts; people takes the floor() remainder
        let files_count = n / 6;
        let chats_count = 2 * n / 6;
        let people_count = n - files_count - chats_count;

        buckets.files = tag_all(&data[..files_count], Category::Files);
        buckets.chats = tag_all(&data[files_count..files_count + chats_count], Category::Chats);
        buckets.people = tag_all(
            &data[files_count + chats_count..files_count + chats_count + people_count],
            Category::People,
        );
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(n: usize) -> Vec<WordMatch> {
        (0..n)
            .map(|i| WordMatch {
                word: format!("word{}", i),
                score: (n - i) as f64,
            })
            .collect()
    }

    fn words(bucket: &[CategorizedMatch]) -> Vec<&str> {
        bucket.iter().map(|m| m.word.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let buckets = categorize(&[]);
        assert!(buckets.is_empty());
        assert_eq!(buckets.counts(), CategoryCounts::default());
    }

    #[test]
    fn test_small_band_duplicates_into_people_and_files() {
        let data = matches(8);
        let buckets = categorize(&data);

        assert_eq!(buckets.total.len(), 8);
        assert_eq!(words(&buckets.people), words(&buckets.total));
        assert_eq!(words(&buckets.files), words(&buckets.total));
        assert!(buckets.chats.is_empty());
        assert!(buckets.list.is_empty());
        assert!(buckets.people.iter().all(|m| m.category == Category::People));
        assert!(buckets.files.iter().all(|m| m.category == Category::Files));
    }

    #[test]
    fn test_band_boundaries() {
        // N=8 duplicates, N=9 switches to the ratio split
        let b8 = categorize(&matches(8));
        assert_eq!(b8.people.len(), 8);
        assert_eq!(b8.files.len(), 8);

        let b9 = categorize(&matches(9));
        assert_eq!(b9.files.len(), 1); // floor(9/6)
        assert_eq!(b9.chats.len(), 3); // floor(18/6)
        assert_eq!(b9.people.len(), 5);
        assert!(b9.list.is_empty());

        // N=24 is still the ratio band, N=25 switches to fixed windows
        let b24 = categorize(&matches(24));
        assert_eq!(b24.files.len(), 4);
        assert_eq!(b24.chats.len(), 8);
        assert_eq!(b24.people.len(), 12);
        assert!(b24.list.is_empty());

        let b25 = categorize(&matches(25));
        assert_eq!(b25.chats.len(), 6);
        assert_eq!(b25.files.len(), 6);
        assert_eq!(b25.people.len(), 6);
        assert_eq!(b25.list.len(), 6);
    }

    #[test]
    fn test_ratio_band_counts_sum_exactly() {
        let buckets = categorize(&matches(12));
        assert_eq!(buckets.files.len(), 2);
        assert_eq!(buckets.chats.len(), 4);
        assert_eq!(buckets.people.len(), 6);
        assert_eq!(
            buckets.files.len() + buckets.chats.len() + buckets.people.len(),
            12
        );
    }

    #[test]
    fn test_ratio_band_preserves_rank_order() {
        let data = matches(12);
        let buckets = categorize(&data);

        assert_eq!(words(&buckets.files), words(&buckets.total)[..2].to_vec());
        assert_eq!(words(&buckets.chats), words(&buckets.total)[2..6].to_vec());
        assert_eq!(words(&buckets.people), words(&buckets.total)[6..].to_vec());
    }

    #[test]
    fn test_large_band_windows_and_overflow() {
        let data = matches(30);
        let buckets = categorize(&data);
        let all = words(&buckets.total);

        assert_eq!(words(&buckets.chats), all[0..6].to_vec());
        assert_eq!(words(&buckets.files), all[6..12].to_vec());
        assert_eq!(words(&buckets.people), all[12..18].to_vec());
        assert_eq!(words(&buckets.list), all[18..24].to_vec());
        // Items 25..30 live only in total
        assert_eq!(buckets.total.len(), 30);
        let assigned =
            buckets.chats.len() + buckets.files.len() + buckets.people.len() + buckets.list.len();
        assert_eq!(assigned, 24);
    }

    #[test]
    fn test_ratio_band_partition_has_no_overlap_or_loss() {
        for n in 9..=24 {
            let data = matches(n);
            let buckets = categorize(&data);
            let mut covered: Vec<&str> = Vec::new();
            covered.extend(words(&buckets.files));
            covered.extend(words(&buckets.chats));
            covered.extend(words(&buckets.people));
            assert_eq!(covered, words(&buckets.total), "partition mismatch at n={}", n);
            assert!(buckets.list.is_empty());
        }
    }

    #[test]
    fn test_wire_format_round_trip() {
        let json = r#"[{"word":"hello","score":3124.0},{"word":"help","score":900.5}]"#;
        let parsed: Vec<WordMatch> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].word, "hello");
        assert_eq!(parsed[1].score, 900.5);
    }
}
