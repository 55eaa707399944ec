//! 자모 입력을 음절로 조립하는 유한 상태 기계
//!
//! 이중 모음, 겹받침, 받침의 다음 글자 초성 이동을 처리합니다.
//! 조합 규칙은 모두 `core::hangul`의 자모 테이블에서 유도합니다.

use crate::core::hangul::{compose, CHOSEONGS, JONGSEONGS, JUNGSEONGS};
use crate::core::keymap::Jamo;

/// 호환용 모음 시작 (ㅏ). 호환용 모음은 중성 인덱스 순서와 같다.
const COMPAT_VOWEL_START: u32 = 0x314F;

/// 조립 중인 글자
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Empty,
    /// 초성만 입력됨
    Leading { choseong: u32 },
    /// 모음만 입력됨
    Vowel { jungseong: u32 },
    /// 초성 + 중성 (+ 종성, 0이면 없음)
    Syllable {
        choseong: u32,
        jungseong: u32,
        jongseong: u32,
    },
}

/// 두 중성을 이중 모음으로 조합 (ㅗ + ㅏ = ㅘ)
fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    combine(&JUNGSEONGS, first, second)
}

/// 두 종성을 겹받침으로 조합 (ㄹ + ㄱ = ㄺ)
fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    combine(&JONGSEONGS, first, second)
}

/// 테이블에서 두 항목을 이어 붙인 항목의 인덱스
fn combine(table: &[&str], first: u32, second: u32) -> Option<u32> {
    let head = *table.get(first as usize)?;
    let tail = *table.get(second as usize)?;
    if head.is_empty() || tail.is_empty() {
        return None;
    }
    table
        .iter()
        .position(|entry| entry.strip_prefix(head) == Some(tail))
        .map(|i| i as u32)
}

/// 종성 자모를 초성 인덱스로
fn choseong_of(jamo: &str) -> Option<u32> {
    CHOSEONGS.iter().position(|c| *c == jamo).map(|i| i as u32)
}

/// 받침을 다음 글자의 초성으로 분리
///
/// 반환: (남는 종성 인덱스, 다음 초성 인덱스)
/// 겹받침은 둘째 자음만, 홑받침은 전체가 넘어간다.
fn split_jongseong(jongseong: u32) -> Option<(u32, u32)> {
    let jamo: &str = JONGSEONGS.get(jongseong as usize)?;
    let mut chars = jamo.char_indices();
    match (chars.next(), chars.next()) {
        (Some(_), Some((split, _))) => {
            let remaining = JONGSEONGS.iter().position(|j| *j == &jamo[..split])?;
            Some((remaining as u32, choseong_of(&jamo[split..])?))
        }
        (Some(_), None) => Some((0, choseong_of(jamo)?)),
        _ => None,
    }
}

/// 영문 키에서 나온 자모를 받아 한글 문자열을 만든다
#[derive(Debug, Clone)]
pub struct Assembler {
    state: State,
    output: String,
}

impl Assembler {
    pub fn new() -> Self {
        Self {
            state: State::Empty,
            output: String::new(),
        }
    }

    /// 자모 하나 입력
    pub fn feed(&mut self, jamo: Jamo) {
        match jamo {
            Jamo::Consonant {
                choseong,
                jongseong,
            } => self.feed_consonant(choseong, jongseong),
            Jamo::Vowel { jungseong } => self.feed_vowel(jungseong),
        }
    }

    /// 조합할 수 없는 문자(숫자, 공백 등). 조립 중인 글자를 확정하고 그대로 출력
    pub fn feed_passthrough(&mut self, c: char) {
        self.flush();
        self.output.push(c);
    }

    /// 남은 글자를 확정하고 결과 반환
    pub fn finish(mut self) -> String {
        self.flush();
        self.output
    }

    fn feed_consonant(&mut self, choseong: u32, jongseong: Option<u32>) {
        if let (
            State::Syllable {
                choseong: cho,
                jungseong: jung,
                jongseong: prev,
            },
            Some(jong),
        ) = (self.state, jongseong)
        {
            let next = if prev == 0 {
                Some(jong)
            } else {
                combine_jongseong(prev, jong)
            };
            if let Some(next) = next {
                self.state = State::Syllable {
                    choseong: cho,
                    jungseong: jung,
                    jongseong: next,
                };
                return;
            }
        }
        self.flush();
        self.state = State::Leading { choseong };
    }

    fn feed_vowel(&mut self, jungseong: u32) {
        self.state = match self.state {
            State::Empty => State::Vowel { jungseong },
            State::Leading { choseong } => State::Syllable {
                choseong,
                jungseong,
                jongseong: 0,
            },
            State::Vowel { jungseong: prev } => match combine_jungseong(prev, jungseong) {
                Some(combined) => State::Vowel {
                    jungseong: combined,
                },
                None => {
                    self.flush();
                    State::Vowel { jungseong }
                }
            },
            State::Syllable {
                choseong,
                jungseong: prev,
                jongseong: 0,
            } => match combine_jungseong(prev, jungseong) {
                Some(combined) => State::Syllable {
                    choseong,
                    jungseong: combined,
                    jongseong: 0,
                },
                None => {
                    self.flush();
                    State::Vowel { jungseong }
                }
            },
            State::Syllable {
                choseong,
                jungseong: prev,
                jongseong: jong,
            } => match split_jongseong(jong) {
                Some((remaining, next)) => {
                    self.state = State::Syllable {
                        choseong,
                        jungseong: prev,
                        jongseong: remaining,
                    };
                    self.flush();
                    State::Syllable {
                        choseong: next,
                        jungseong,
                        jongseong: 0,
                    }
                }
                None => {
                    self.flush();
                    State::Vowel { jungseong }
                }
            },
        };
    }

    /// 조립 중인 글자를 출력에 확정
    fn flush(&mut self) {
        let pending = match self.state {
            State::Empty => None,
            State::Leading { choseong } => {
                CHOSEONGS.get(choseong as usize).and_then(|c| c.chars().next())
            }
            State::Vowel { jungseong } => char::from_u32(COMPAT_VOWEL_START + jungseong),
            State::Syllable {
                choseong,
                jungseong,
                jongseong,
            } => compose(choseong, jungseong, jongseong),
        };
        if let Some(c) = pending {
            self.output.push(c);
        }
        self.state = State::Empty;
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}
