//! 한글 음절 분해/조합 코덱
//!
//! 완성형 음절(가-힣)을 초성/중성/종성으로 나누고 다시 합치는 저수준 연산과,
//! 검색 매칭에서 쓰는 구조 판별(받침 유무, 초성 가능 여부, 부분 일치)을 제공합니다.
//!
//! 분해 함수(`choseong_index` 등)는 완성형 음절만 받는다고 가정합니다.
//! 호출 측이 `is_full_hangul`로 먼저 확인해야 하며, 범위 밖 입력은
//! 테이블 범위 안의 의미 없는 값을 돌려줄 뿐 패닉하지 않습니다.

use std::ops::Deref;

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 44032;
/// 한글 음절 끝 코드포인트 (힣)
pub const HANGUL_SYLLABLE_END: u32 = HANGUL_SYLLABLE_BASE + 11171;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 호환용 자모 시작 (ㄱ)
const COMPAT_JAMO_START: u32 = 0x3131;
/// 호환용 모음 시작 (ㅏ)
const COMPAT_VOWEL_START: u32 = 0x314F;
/// 호환용 자모 끝 (ㅣ)
const COMPAT_JAMO_END: u32 = 0x3163;

/// 초성 테이블
#[rustfmt::skip]
pub const CHOSEONGS: [&str; 19] = [
    "ㄱ", "ㄲ", "ㄴ", "ㄷ", "ㄸ", "ㄹ", "ㅁ", "ㅂ", "ㅃ", "ㅅ",
    "ㅆ", "ㅇ", "ㅈ", "ㅉ", "ㅊ", "ㅋ", "ㅌ", "ㅍ", "ㅎ",
];

/// 중성 테이블 (이중 모음은 두 글자로 저장)
#[rustfmt::skip]
pub const JUNGSEONGS: [&str; 21] = [
    "ㅏ", "ㅐ", "ㅑ", "ㅒ", "ㅓ", "ㅔ", "ㅕ", "ㅖ", "ㅗ", "ㅗㅏ",
    "ㅗㅐ", "ㅗㅣ", "ㅛ", "ㅜ", "ㅜㅓ", "ㅜㅔ", "ㅜㅣ", "ㅠ", "ㅡ", "ㅡㅣ",
    "ㅣ",
];

/// 종성 테이블 (0번은 종성 없음, 겹받침은 두 글자로 저장)
#[rustfmt::skip]
pub const JONGSEONGS: [&str; 28] = [
    "", "ㄱ", "ㄲ", "ㄱㅅ", "ㄴ", "ㄴㅈ", "ㄴㅎ", "ㄷ", "ㄹ", "ㄹㄱ",
    "ㄹㅁ", "ㄹㅂ", "ㄹㅅ", "ㄹㅌ", "ㄹㅍ", "ㄹㅎ", "ㅁ", "ㅂ", "ㅂㅅ", "ㅅ",
    "ㅆ", "ㅇ", "ㅈ", "ㅊ", "ㅋ", "ㅌ", "ㅍ", "ㅎ",
];

/// 음절 기준 오프셋. 범위 밖 입력도 패닉 없이 감싼다.
fn offset(code: char) -> u32 {
    (code as u32).wrapping_sub(HANGUL_SYLLABLE_BASE)
}

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_full_hangul(code: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_END).contains(&(code as u32))
}

/// 초성 인덱스 (0~18)
pub fn choseong_index(code: char) -> u32 {
    offset(code) / (JUNGSEONG_COUNT * JONGSEONG_COUNT) % CHOSEONG_COUNT
}

/// 중성 인덱스 (0~20)
pub fn jungseong_index(code: char) -> u32 {
    offset(code) / JONGSEONG_COUNT % JUNGSEONG_COUNT
}

/// 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn jongseong_index(code: char) -> u32 {
    offset(code) % JONGSEONG_COUNT
}

/// 완성형 음절의 초성 자모
///
/// ```
/// use hangul_search::core::hangul::get_choseong;
/// assert_eq!(get_choseong('광'), "ㄱ");
/// ```
pub fn get_choseong(code: char) -> &'static str {
    CHOSEONGS[choseong_index(code) as usize]
}

/// 완성형 음절의 중성. 이중 모음은 두 글자("ㅗㅏ")로 반환
pub fn get_jungseong(code: char) -> &'static str {
    JUNGSEONGS[jungseong_index(code) as usize]
}

/// 완성형 음절의 종성. 없으면 빈 문자열, 겹받침은 두 글자("ㄱㅅ")로 반환
pub fn get_jongseong(code: char) -> &'static str {
    JONGSEONGS[jongseong_index(code) as usize]
}

/// 받침이 있는 음절인지 확인
pub fn has_batchim(code: char) -> bool {
    jongseong_index(code) != 0
}

/// 단독으로 초성이 될 수 있는 자모인지 확인
pub fn can_be_choseong(code: char) -> bool {
    CHOSEONGS.iter().any(|jamo| jamo.starts_with(code))
}

/// 중성 테이블의 첫 자모와 일치하는지 확인.
/// 이중 모음 글자(ㅘ 등)는 테이블에 두 글자로 저장되므로 해당하지 않는다.
pub fn can_be_jungseong(code: char) -> bool {
    JUNGSEONGS.iter().any(|jamo| jamo.starts_with(code))
}

pub fn equal_choseong(a: char, b: char) -> bool {
    choseong_index(a) == choseong_index(b)
}

pub fn equal_jungseong(a: char, b: char) -> bool {
    jungseong_index(a) == jungseong_index(b)
}

pub fn equal_jongseong(a: char, b: char) -> bool {
    jongseong_index(a) == jongseong_index(b)
}

/// 초성/중성/종성 인덱스로 완성형 음절 조합
/// - choseong: 0~18
/// - jungseong: 0~20
/// - jongseong: 0~27 (0 = 종성 없음)
///
/// 인덱스가 범위를 벗어나면 None
pub fn compose(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    char::from_u32(
        HANGUL_SYLLABLE_BASE + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT + jongseong,
    )
}

/// 종성 자모 문자열의 인덱스
fn jongseong_position(jamo: &str) -> Option<u32> {
    JONGSEONGS.iter().position(|j| *j == jamo).map(|i| i as u32)
}

/// 받침을 다음 글자의 초성으로 넘긴다.
///
/// 반환: (넘기고 남은 음절, 다음 초성이 될 자모)
/// - 겹받침: 첫 자음은 받침으로 남기고 둘째 자음을 넘김 (밦 -> 밥, "ㅅ")
/// - 홑받침: 받침 없는 음절과 그 받침 (숨 -> 수, "ㅁ")
/// - 받침 없음: 그대로, 빈 문자열
pub fn disassemble_to_hangul_code_and_choseong(code: char) -> (char, &'static str) {
    let cho = choseong_index(code);
    let jung = jungseong_index(code);
    let jong = get_jongseong(code);

    let mut chars = jong.char_indices();
    match (chars.next(), chars.next()) {
        (Some(_), Some((split, _))) => {
            let remaining = jongseong_position(&jong[..split]).unwrap_or(0);
            (compose(cho, jung, remaining).unwrap_or(code), &jong[split..])
        }
        _ => (compose(cho, jung, 0).unwrap_or(code), jong),
    }
}

/// 호환용 겹자모를 구성 자모로 분리 (겹받침 자음과 이중 모음)
fn split_compound_jamo(c: char) -> Option<&'static str> {
    let parts = match c {
        'ㄳ' => "ㄱㅅ",
        'ㄵ' => "ㄴㅈ",
        'ㄶ' => "ㄴㅎ",
        'ㄺ' => "ㄹㄱ",
        'ㄻ' => "ㄹㅁ",
        'ㄼ' => "ㄹㅂ",
        'ㄽ' => "ㄹㅅ",
        'ㄾ' => "ㄹㅌ",
        'ㄿ' => "ㄹㅍ",
        'ㅀ' => "ㄹㅎ",
        'ㅄ' => "ㅂㅅ",
        'ㅘ' => "ㅗㅏ",
        'ㅙ' => "ㅗㅐ",
        'ㅚ' => "ㅗㅣ",
        'ㅝ' => "ㅜㅓ",
        'ㅞ' => "ㅜㅔ",
        'ㅟ' => "ㅜㅣ",
        'ㅢ' => "ㅡㅣ",
        _ => return None,
    };
    Some(parts)
}

/// 문자열의 겹자모(ㄳ, ㅄ 등)를 낱자모로 풀어쓴다.
/// 쌍자음(ㄲ, ㅆ 등)은 분리하지 않는다.
///
/// ```
/// use hangul_search::core::hangul::disassemble_choseong;
/// assert_eq!(disassemble_choseong("ㅈㅄ 2"), "ㅈㅂㅅ 2");
/// ```
pub fn disassemble_choseong(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        match split_compound_jamo(c) {
            Some(parts) => result.push_str(parts),
            None => result.push(c),
        }
    }
    result
}

/// 한 글자를 풀어쓴 자모 열 (최대 초성 1 + 중성 2 + 종성 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jamos {
    buf: [char; 5],
    len: usize,
}

impl Jamos {
    fn new() -> Self {
        Self {
            buf: ['\0'; 5],
            len: 0,
        }
    }

    fn push_str(&mut self, jamo: &str) {
        for c in jamo.chars() {
            self.buf[self.len] = c;
            self.len += 1;
        }
    }
}

impl Deref for Jamos {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.buf[..self.len]
    }
}

/// 한 글자를 자모 단위로 풀어쓴다.
/// - 완성형 음절: 초성 + 중성 + 종성 (이중 모음/겹받침은 두 자모)
/// - 겹자모: 구성 자모
/// - 그 외: 글자 그대로
pub fn disassemble(code: char) -> Jamos {
    let mut jamos = Jamos::new();
    if is_full_hangul(code) {
        jamos.push_str(get_choseong(code));
        jamos.push_str(get_jungseong(code));
        jamos.push_str(get_jongseong(code));
    } else if let Some(parts) = split_compound_jamo(code) {
        jamos.push_str(parts);
    } else {
        jamos.buf[0] = code;
        jamos.len = 1;
    }
    jamos
}

/// `b`가 완성형 음절 `a`를 입력하는 도중의 모습인지 확인
///
/// - 같은 글자면 참
/// - `a`가 완성형 음절이 아니면 거짓 (ㄳ/ㄱ, ㅘ/ㅗ)
/// - `b`가 초성이 될 수 있는 자음이면 `a`의 초성과 비교 (각/ㄱ)
/// - `b`도 완성형 음절이면 초성과 중성 인덱스가 같아야 하고,
///   `b`에 받침이 있으면 종성도 같아야 한다 (앱/애는 참, 앱/앳은 거짓)
///
/// 이중 모음이나 겹받침을 덜 입력한 경우(과/고, 읽/일)는 인덱스가 달라 거짓입니다.
pub fn is_partial(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    if !is_full_hangul(a) {
        return false;
    }
    if can_be_choseong(b) {
        return get_choseong(a).starts_with(b);
    }
    if is_full_hangul(b) {
        return equal_choseong(a, b)
            && equal_jungseong(a, b)
            && (!has_batchim(b) || equal_jongseong(a, b));
    }
    false
}

/// 한글(완성형 음절 또는 호환용 자모)이 포함되어 있는지 검사
pub fn includes_hangul(text: &str) -> bool {
    text.chars().any(|c| {
        is_full_hangul(c) || (COMPAT_JAMO_START..=COMPAT_JAMO_END).contains(&(c as u32))
    })
}

/// 모음 자모나 완성형 음절이 없는지 검사 (포함된 한글이 모두 자음)
pub fn is_choseong_only(text: &str) -> bool {
    !text
        .chars()
        .any(|c| is_full_hangul(c) || (COMPAT_VOWEL_START..=COMPAT_JAMO_END).contains(&(c as u32)))
}
