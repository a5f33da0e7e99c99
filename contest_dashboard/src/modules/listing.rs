use crate::modules::platforms::platform_name;
use contest_dashboard_libs::clist::model::Contest;

// 1ページに表示する件数
pub const PAGE_SIZE: u32 = 10;
// 直接ジャンプできるページ番号の数
const DIRECT_PAGE_LINKS: u32 = 5;

/// プラットフォーム条件とキーワード条件をANDで適用する。
/// どちらも毎回ゼロから評価し直す。差分更新はしない。
pub fn apply_filters(
    contests: &[Contest],
    platform: Option<&str>,
    keyword: Option<&str>,
) -> Vec<Contest> {
    contests
        .iter()
        .filter(|contest| matches_platform(contest, platform) && matches_keyword(contest, keyword))
        .cloned()
        .collect()
}

fn matches_platform(contest: &Contest, platform: Option<&str>) -> bool {
    match platform {
        None => true,
        Some("all") => true,
        Some(key) => contest.host.contains(key),
    }
}

fn matches_keyword(contest: &Contest, keyword: Option<&str>) -> bool {
    match keyword {
        None => true,
        Some(query) if query.is_empty() => true,
        Some(query) => {
            let query = query.to_lowercase();
            contest.event.to_lowercase().contains(&query)
                || platform_name(&contest.host).to_lowercase().contains(&query)
        }
    }
}

pub fn page_count(total: u32) -> u32 {
    (total + PAGE_SIZE - 1) / PAGE_SIZE
}

/// 要求されたページ番号を[1, pages]に丸める。pagesが0でも1を返す。
pub fn clamp_page(page: u32, pages: u32) -> u32 {
    if pages == 0 {
        1
    } else {
        page.clamp(1, pages)
    }
}

pub fn paginate<T>(items: &[T], page: u32) -> &[T] {
    let page = clamp_page(page, page_count(items.len() as u32));
    let start = usize::min(((page - 1) * PAGE_SIZE) as usize, items.len());
    let end = usize::min(start + PAGE_SIZE as usize, items.len());
    &items[start..end]
}

/// 番号付きページリンクに出すページ番号。先頭から最大5ページぶん。
pub fn page_numbers(pages: u32) -> Vec<u32> {
    (1..=u32::min(pages, DIRECT_PAGE_LINKS)).collect()
}
