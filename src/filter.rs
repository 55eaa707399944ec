//! 줄 단위 검색 필터
//!
//! 입력의 각 줄을 검색어로 거르고 일치하는 줄만 출력합니다.

use crate::config::SearchConfig;
use crate::core::converter::convert_to_hangul;
use crate::matcher::HangulQuery;
use std::io::{self, BufRead, Write};

/// 검색어와, 설정에 따라 두벌식 자판으로 바꾼 검색어
pub fn build_queries(query: &str, config: &SearchConfig) -> Vec<HangulQuery> {
    let mut queries = vec![HangulQuery::new(query)];
    if config.qwerty_fallback && query.chars().any(|c| c.is_ascii_alphabetic()) {
        let converted = convert_to_hangul(query);
        if converted != query {
            log::debug!("영문 자판 검색어 추가: '{}'", converted);
            queries.push(HangulQuery::new(&converted));
        }
    }
    queries
}

/// 검색어 중 하나라도 일치하는 줄을 출력
///
/// `limit`이 0이 아니면 그 수만큼 출력하고 멈춘다.
/// 반환: 출력한 줄 수
pub fn filter_lines<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    queries: &[HangulQuery],
    limit: usize,
) -> io::Result<usize> {
    let mut printed = 0usize;
    for line in input.lines() {
        let line = line?;
        if !queries.iter().any(|q| q.matches(&line)) {
            continue;
        }
        writeln!(output, "{}", line)?;
        printed += 1;
        if limit != 0 && printed >= limit {
            break;
        }
    }
    output.flush()?;
    Ok(printed)
}
