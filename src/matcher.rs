//! 검색어 입력 중 매칭
//!
//! 대상 문자열을 검색어가 가리키는지 너그럽게 판별합니다.
//!
//! 1. 대소문자(ASCII)를 무시한 완전 일치
//! 2. 초성 검색: 검색어가 자음으로만 이루어지면 대상의 초성 열과 비교
//! 3. 연속되지 않은 부분 문자열 일치
//! 4. 마지막 글자 보정: 마지막 한 글자만 남았을 때
//!    - 받침을 아직 입력하지 않은 경우 (앱 / 애)
//!    - 받침이 다음 글자의 초성인 경우 (수명 / 숨)

use crate::core::hangul::{
    disassemble, disassemble_choseong, disassemble_to_hangul_code_and_choseong, get_choseong,
    has_batchim, is_choseong_only, is_full_hangul,
};

/// 검색어 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// 모음이나 완성형 음절이 없음. 초성 검색을 시도한다.
    ChoseongOnly,
    /// 그 외
    Mixed,
}

impl SearchKind {
    pub fn classify(search: &str) -> Self {
        if is_choseong_only(search) {
            SearchKind::ChoseongOnly
        } else {
            SearchKind::Mixed
        }
    }
}

/// 한 번 준비해 두고 여러 대상에 반복해서 쓰는 검색어
///
/// # Examples
/// ```
/// use hangul_search::HangulQuery;
///
/// let query = HangulQuery::new("ㅈㅄ 2");
/// assert!(query.matches("좋은 보석 2개"));
/// assert!(!query.matches("보석 2개"));
/// ```
#[derive(Debug, Clone)]
pub struct HangulQuery {
    /// 소문자로 바꾼 검색어
    chars: Vec<char>,
    kind: SearchKind,
    /// 겹자모를 풀어쓴 초성 검색어 (ChoseongOnly일 때만 사용)
    choseongs: Vec<char>,
}

impl HangulQuery {
    pub fn new(search: &str) -> Self {
        let folded = search.to_ascii_lowercase();
        let kind = SearchKind::classify(&folded);
        let choseongs = match kind {
            SearchKind::ChoseongOnly => disassemble_choseong(&folded).chars().collect(),
            SearchKind::Mixed => Vec::new(),
        };
        Self {
            chars: folded.chars().collect(),
            kind,
            choseongs,
        }
    }

    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// 대상 문자열이 이 검색어와 일치하는지 판별
    ///
    /// 빈 검색어는 모든 대상과 일치합니다.
    pub fn matches(&self, target: &str) -> bool {
        let Some((&last, _)) = self.chars.split_last() else {
            return true;
        };
        let target: Vec<char> = target.chars().map(|c| c.to_ascii_lowercase()).collect();

        if target == self.chars {
            log::trace!("exact match");
            return true;
        }

        if self.kind == SearchKind::ChoseongOnly && self.matches_choseong(&target) {
            log::trace!("choseong match");
            return true;
        }

        let (matched, next) = self.match_subsequence(&target);
        if matched == self.chars.len() {
            return true;
        }

        if matched == self.chars.len() - 1 {
            let rest = &target[next..];
            if includes_partial(rest, last) {
                log::trace!("partial last character match: {}", last);
                return true;
            }
            if includes_separated(rest, last) {
                log::trace!("separated last character match: {}", last);
                return true;
            }
        }

        false
    }

    /// 초성 검색어가 대상의 (연속되지 않은) 초성 열인지 확인
    fn matches_choseong(&self, target: &[char]) -> bool {
        let mut pending = self.choseongs.iter().peekable();
        for &c in target {
            let Some(&&jamo) = pending.peek() else {
                break;
            };
            if c == jamo || leading_jamo(c) == Some(jamo) {
                pending.next();
            }
        }
        pending.peek().is_none()
    }

    /// 검색어를 대상의 부분 문자열로 앞에서부터 맞춘다.
    ///
    /// 반환: (일치한 검색어 글자 수, 마지막 일치 다음의 대상 위치)
    fn match_subsequence(&self, target: &[char]) -> (usize, usize) {
        let mut matched = 0;
        let mut next = 0;
        for (i, &c) in target.iter().enumerate() {
            if matched == self.chars.len() {
                break;
            }
            if c == self.chars[matched] {
                matched += 1;
                next = i + 1;
            }
        }
        (matched, next)
    }
}

/// 대상 문자열이 검색어와 일치하는지 너그럽게 판별
///
/// # Examples
/// ```
/// use hangul_search::match_hangul;
///
/// assert!(match_hangul("Hello", "heLLo"));
/// assert!(match_hangul("가나다라", "가다"));
/// assert!(match_hangul("좋은 보석 2개", "ㅈㅄ 2"));
/// assert!(match_hangul("애벌레", "애버"));
/// assert!(match_hangul("수박", "숩"));
/// ```
pub fn match_hangul(target: &str, search: &str) -> bool {
    HangulQuery::new(search).matches(target)
}

/// 완성형 음절의 초성 자모. 음절이 아니면 None
fn leading_jamo(c: char) -> Option<char> {
    if is_full_hangul(c) {
        get_choseong(c).chars().next()
    } else {
        None
    }
}

/// `rest` 안에 `last`를 입력하는 도중으로 볼 수 있는 글자가 있는지 확인 (앱 / 애)
///
/// `last`를 풀어쓴 자모가 대상 글자를 풀어쓴 자모의 앞부분이면 된다.
/// 이중 모음이나 겹받침을 덜 입력한 경우(과 / 고, 읽 / 일)도 포함한다.
fn includes_partial(rest: &[char], last: char) -> bool {
    let typed = disassemble(last);
    rest.iter().any(|&c| c == last || disassemble(c).starts_with(&typed))
}

/// `last`의 받침을 다음 글자의 초성으로 옮겨 `rest`와 맞출 수 있는지 확인 (수명 / 숨)
///
/// 받침을 뗀 음절의 첫 등장 위치 뒤에서만 초성을 찾는다.
fn includes_separated(rest: &[char], last: char) -> bool {
    if !is_full_hangul(last) || !has_batchim(last) {
        return false;
    }
    let (syllable, choseong) = disassemble_to_hangul_code_and_choseong(last);
    let mut choseong = choseong.chars();
    let (Some(choseong), None) = (choseong.next(), choseong.next()) else {
        return false;
    };

    match rest.iter().position(|&c| c == syllable) {
        Some(p) => rest[p + 1..]
            .iter()
            .any(|&c| leading_jamo(c) == Some(choseong)),
        None => false,
    }
}
