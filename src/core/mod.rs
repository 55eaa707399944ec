//! 한글 코덱과 영문 자판 변환

pub mod assembler;
pub mod converter;
pub mod hangul;
pub mod keymap;
