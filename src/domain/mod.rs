//! Domain layer
//! 퀴즈 엔티티, 식별자 해석, 게임 상태 기계를 외부 의존성 없이 표현한다.

pub mod identifier;
pub mod play;
pub mod quiz;
