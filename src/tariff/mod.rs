//! 요금 계산 모듈 모음. 입력 검증, 일반/TOU 요금 계산, 두 요금제 비교로 구성된다.

pub mod comparison;
pub mod input;
pub mod regular;
pub mod report;
pub mod tou;

pub use comparison::*;
pub use input::*;
pub use regular::*;
pub use report::*;
pub use tou::*;
