//! 두벌식 자판 영문 키 -> 한글 자모 매핑

/// 자판 키 하나가 나타내는 자모
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    /// 자음 (choseong: 초성 인덱스, jongseong: 종성 인덱스, ㄸ/ㅃ/ㅉ은 None)
    Consonant { choseong: u32, jongseong: Option<u32> },
    /// 모음 (중성 인덱스)
    Vowel { jungseong: u32 },
}

const fn consonant(choseong: u32, jongseong: u32) -> Jamo {
    Jamo::Consonant {
        choseong,
        jongseong: Some(jongseong),
    }
}

const fn leading_only(choseong: u32) -> Jamo {
    Jamo::Consonant {
        choseong,
        jongseong: None,
    }
}

const fn vowel(jungseong: u32) -> Jamo {
    Jamo::Vowel { jungseong }
}

/// 영문 키 하나를 자모로 변환
///
/// Shift 조합(Q W E R T O P)은 쌍자음/ㅒ/ㅖ로, 그 외 대문자와
/// 매핑 없는 문자는 None
pub fn key_to_jamo(key: char) -> Option<Jamo> {
    let jamo = match key {
        'r' => consonant(0, 1),   // ㄱ
        'R' => consonant(1, 2),   // ㄲ
        's' => consonant(2, 4),   // ㄴ
        'e' => consonant(3, 7),   // ㄷ
        'E' => leading_only(4),   // ㄸ
        'f' => consonant(5, 8),   // ㄹ
        'a' => consonant(6, 16),  // ㅁ
        'q' => consonant(7, 17),  // ㅂ
        'Q' => leading_only(8),   // ㅃ
        't' => consonant(9, 19),  // ㅅ
        'T' => consonant(10, 20), // ㅆ
        'd' => consonant(11, 21), // ㅇ
        'w' => consonant(12, 22), // ㅈ
        'W' => leading_only(13),  // ㅉ
        'c' => consonant(14, 23), // ㅊ
        'z' => consonant(15, 24), // ㅋ
        'x' => consonant(16, 25), // ㅌ
        'v' => consonant(17, 26), // ㅍ
        'g' => consonant(18, 27), // ㅎ

        'k' => vowel(0),  // ㅏ
        'o' => vowel(1),  // ㅐ
        'i' => vowel(2),  // ㅑ
        'O' => vowel(3),  // ㅒ
        'j' => vowel(4),  // ㅓ
        'p' => vowel(5),  // ㅔ
        'u' => vowel(6),  // ㅕ
        'P' => vowel(7),  // ㅖ
        'h' => vowel(8),  // ㅗ
        'y' => vowel(12), // ㅛ
        'n' => vowel(13), // ㅜ
        'b' => vowel(17), // ㅠ
        'm' => vowel(18), // ㅡ
        'l' => vowel(20), // ㅣ

        _ => return None,
    };
    Some(jamo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_keys() {
        assert_eq!(key_to_jamo('r'), Some(consonant(0, 1)));
        assert_eq!(key_to_jamo('g'), Some(consonant(18, 27)));
        assert_eq!(key_to_jamo('T'), Some(consonant(10, 20)));
    }

    #[test]
    fn test_leading_only_consonants() {
        for key in ['E', 'Q', 'W'] {
            assert!(matches!(
                key_to_jamo(key),
                Some(Jamo::Consonant { jongseong: None, .. })
            ));
        }
    }

    #[test]
    fn test_vowel_keys() {
        assert_eq!(key_to_jamo('k'), Some(vowel(0)));
        assert_eq!(key_to_jamo('h'), Some(vowel(8)));
        assert_eq!(key_to_jamo('P'), Some(vowel(7)));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(key_to_jamo('1'), None);
        assert_eq!(key_to_jamo(' '), None);
        assert_eq!(key_to_jamo('X'), None);
        assert_eq!(key_to_jamo('가'), None);
    }
}
