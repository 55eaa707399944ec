//! 영문 자판 입력 -> 한글 변환

use crate::core::assembler::Assembler;
use crate::core::keymap::key_to_jamo;

/// 두벌식 자판에서 한글 대신 영문으로 친 문자열을 한글로 변환
/// 변환할 수 없는 문자(숫자, 특수문자, 매핑 없는 영문)는 그대로 유지
///
/// ```
/// use hangul_search::convert_to_hangul;
/// assert_eq!(convert_to_hangul("dkssudgktpdy"), "안녕하세요");
/// ```
pub fn convert_to_hangul(text: &str) -> String {
    let mut assembler = Assembler::new();
    for c in text.chars() {
        match key_to_jamo(c) {
            Some(jamo) => assembler.feed(jamo),
            None => assembler.feed_passthrough(c),
        }
    }
    assembler.finish()
}
