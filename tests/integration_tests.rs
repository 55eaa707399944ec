//! 통합 테스트 - 검색어 매칭과 공개 인터페이스

use hangul_search::core::hangul::{
    choseong_index, compose, equal_choseong, get_choseong, get_jongseong, get_jungseong,
    is_partial, jongseong_index, jungseong_index, HANGUL_SYLLABLE_BASE, HANGUL_SYLLABLE_END,
};
use hangul_search::{convert_to_hangul, includes_hangul, match_hangul, HangulQuery, SearchKind};
use std::time::{Duration, Instant};

fn assert_cases(cases: &[(&str, &str, bool)]) {
    for &(target, search, expected) in cases {
        assert_eq!(
            match_hangul(target, search),
            expected,
            "match_hangul({:?}, {:?})",
            target,
            search
        );
    }
}

#[test]
fn test_identical_strings() {
    assert_cases(&[
        ("a", "a", true),
        ("가 나", "가 나", true),
        ("ㄱ나다라123", "ㄱ나다라123", true),
        ("Zx0ㅡㅡ", "Zx0ㅡㅡ", true),
    ]);
}

#[test]
fn test_substring() {
    assert_cases(&[
        ("가 나", "가", true),
        ("라123", "라123", true),
        ("x0", "x0", true),
        ("xyz", "a", false),
    ]);
}

#[test]
fn test_separated_substring() {
    assert_cases(&[
        ("가나다라", "가다", true),
        ("1234567", "147", true),
        ("한국123", "한3", true),
        ("k케이j제이", "k이이", true),
    ]);
}

#[test]
fn test_case_insensitive() {
    assert_cases(&[
        ("ABC", "abc", true),
        ("abc", "ABC", true),
        ("Hello", "heLLo", true),
    ]);
}

#[test]
fn test_choseong() {
    assert_cases(&[
        ("감난닭뢈", "ㄱㄴㄷㄹ", true),
        ("a가1항", "aㄱ1ㅎ", true),
        ("보석", "ㅄ", true),
        ("ㄱ", "가", false),
        ("ㄱ", "ㄱ", true),
        ("가나다", "ㄱ나", false),
    ]);
}

#[test]
fn test_separated_choseong() {
    assert_cases(&[
        ("감난닭뢈몂뷷셺", "ㄱㄴㅁㅂㅅ", true),
        ("뿡뿡붕2짱", "ㅃ2ㅉ", true),
        ("경나뎜릐망", "ㄱㄴㅁ", true),
        ("낫 놓고 ㄱ자도 know", "ㄴ ㄱkow", true),
        ("좋은 보석 2개", "ㅈㅄ 2", true),
    ]);
}

#[test]
fn test_last_character_without_batchim() {
    assert_cases(&[
        ("앱", "애", true),
        ("등앱", "등애", true),
        ("앱", "앳", false),
        ("등앱", "드애", false),
    ]);
}

#[test]
fn test_batchim_moves_to_next_choseong() {
    assert_cases(&[
        ("수명", "숨", true),
        ("수명", "솜", false),
        ("2사이다", "2사읻", true),
        ("밥사", "밦", true),
        ("아라비안", "앏", false),
        ("장난감", "장낙", false),
        ("애벌레", "애버", true),
        ("수박", "숩", true),
    ]);
}

#[test]
fn test_typing_progress() {
    let target = "마력이 깃든 안대";
    assert_cases(&[
        (target, "ㅁ", true),
        (target, "마", true),
        (target, "말", true),
        (target, "말ㅇ", false),
        (target, "마려", true),
        (target, "마력", true),
        (target, "마력ㅇ", true),
        (target, "마력이", true),
        (target, "막", true),
        (target, "마기", true),
        (target, "마기 ", false),
        (target, "마깃", true),
        (target, "마깃ㅇ", true),
        (target, "마깃아", true),
        (target, "마깃안", true),
    ]);

    let target = "루즈 컨트롤 머신 마크";
    assert_cases(&[
        (target, "루", true),
        (target, "룾", true),
        (target, "뤀", true),
        (target, "루커", true),
        (target, "루컨", true),
        (target, "루컨마", true),
        (target, "루즈컨", true),
        (target, "루머마", true),
    ]);
}

#[test]
fn test_unfinished_compound_vowel_and_cluster() {
    // 이중 모음이나 겹받침을 입력하는 도중
    assert_cases(&[
        ("사과", "사고", true),
        ("책 읽기", "책 일", true),
        ("사고", "사과", false),
    ]);
}

#[test]
fn test_reflexive() {
    for s in ["a", "가", "ㄱ", "ㅄ", "Hello World", "마력이 깃든 안대", "뷁!@#", "1ㄱ가"] {
        assert!(match_hangul(s, s), "{}", s);
    }
}

#[test]
fn test_ascii_case_folding() {
    for s in ["hello", "Rust 2021", "mIxEd CaSe", "a1b2c3"] {
        assert!(match_hangul(&s.to_uppercase(), &s.to_lowercase()), "{}", s);
        assert!(match_hangul(&s.to_lowercase(), &s.to_uppercase()), "{}", s);
    }
}

#[test]
fn test_subsequence_always_matches() {
    let target = "한글 검색 2024 Edition";
    let chars: Vec<char> = target.chars().collect();
    for step in 1..=4 {
        for start in 0..step {
            let search: String = chars.iter().skip(start).step_by(step).collect();
            if !search.is_empty() {
                assert!(match_hangul(target, &search), "{:?}", search);
            }
        }
    }
}

#[test]
fn test_empty_search_matches() {
    assert!(match_hangul("", ""));
    assert!(match_hangul("아무거나", ""));
}

#[test]
fn test_compiled_query_reuse() {
    let query = HangulQuery::new("ㄱㄴ");
    assert_eq!(query.kind(), SearchKind::ChoseongOnly);

    let targets = ["가나다", "고니", "나가", "강남역"];
    let matched: Vec<&str> = targets.iter().copied().filter(|t| query.matches(t)).collect();
    assert_eq!(matched, vec!["가나다", "고니", "강남역"]);
}

#[test]
fn test_qwerty_search() {
    // 한영 전환을 잊고 입력한 검색어
    let converted = convert_to_hangul("wkdsksrka");
    assert_eq!(converted, "장난감");
    assert!(match_hangul("장난감 가게", &converted));
    assert!(match_hangul("장난감 가게", &convert_to_hangul("wkdsk")));
}

#[test]
fn test_includes_hangul() {
    let cases = [
        ("가", true),
        ("ㄱ", true),
        ("ㅢ", true),
        ("1", false),
        ("햏a", true),
        ("a가", true),
        ("1ㄱ1", true),
        ("z", false),
    ];
    for (text, expected) in cases {
        assert_eq!(includes_hangul(text), expected, "{}", text);
    }
}

#[test]
fn test_codec_components() {
    assert_eq!('가' as u32, 44032);
    assert_eq!(get_choseong('광'), "ㄱ");
    assert_eq!(get_jungseong('광'), "ㅗㅏ");
    assert_eq!(get_jongseong('광'), "ㅇ");
    assert!(equal_choseong('광', '격'));
    assert!(!equal_choseong('광', '꽝'));

    // 코덱의 부분 일치는 인덱스 단위
    assert!(is_partial('앱', '애'));
    assert!(!is_partial('읽', '일'));
    assert!(!is_partial('과', '고'));
    assert!(!is_partial('ㄳ', 'ㄱ'));
    assert!(!is_partial('ㅘ', 'ㅗ'));
}

#[test]
fn test_codec_round_trip() {
    for code in HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_END {
        let c = char::from_u32(code).unwrap();
        assert_eq!(
            compose(choseong_index(c), jungseong_index(c), jongseong_index(c)),
            Some(c)
        );
    }
}

#[test]
fn test_interactive_latency() {
    let target = "루즈 컨트롤 머신 마크";
    let budget = Duration::from_secs(2);

    for search in ["루즈 컨롤 머신", "루즈 컨롤 머맠", "ㄹㅈ ㅋㅌㄹ ㅁㅁㅋ"] {
        let start = Instant::now();
        for _ in 0..10_000 {
            std::hint::black_box(match_hangul(
                std::hint::black_box(target),
                std::hint::black_box(search),
            ));
        }
        let elapsed = start.elapsed();
        assert!(elapsed < budget, "{:?}: {:?}", search, elapsed);
    }
}
