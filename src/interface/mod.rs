//! Interface layer
//! 명령행 진입과 대화형 쉘을 담당한다.

pub mod cli;
