// SPDX-License-Identifier: MPL-2.0
//! Suppression of non-critical background errors.
//!
//! Failures of background synchronization (playback records, statistics,
//! favorites, search history, intro/outro skip settings) must never interrupt
//! the user. Matching is a case-sensitive substring test against a fixed,
//! embedded list.

/// Substrings identifying messages that are never displayed.
///
/// Glosses, in order: "background sync", "failed to save playback record",
/// "failed to fetch playback record", "background sync of user stats failed",
/// "background sync of favorites failed", "background sync of search history
/// failed", "background sync of skip-intro/outro config failed".
pub const SUPPRESSED_PATTERNS: [&str; 7] = [
    "后台同步",
    "保存播放记录失败",
    "获取播放记录失败",
    "后台同步用户统计数据失败",
    "后台同步收藏失败",
    "后台同步搜索历史失败",
    "后台同步跳过片头片尾配置失败",
];

/// Returns the first pattern contained in `message`, if any.
#[must_use]
pub fn matching_pattern(message: &str) -> Option<&'static str> {
    SUPPRESSED_PATTERNS
        .iter()
        .copied()
        .find(|pattern| message.contains(pattern))
}

/// Returns true when `message` must be silently dropped.
#[must_use]
pub fn is_suppressed(message: &str) -> bool {
    matching_pattern(message).is_some()
}
