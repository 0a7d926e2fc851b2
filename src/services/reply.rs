use crate::models::{ReservationRecord, SkillResponse};

pub const FALLBACK_TEXT: &str = "죄송합니다. 예약 처리 중 오류가 발생했습니다. 다시 시도해주세요.";

pub fn success_reply(record: &ReservationRecord, reservation_id: &str) -> SkillResponse {
    let text = format!(
        "✅ 단체관람 예약 신청이 완료되었습니다!\n\n\
         📋 접수 정보\n\
         • 접수번호: {reservation_id}\n\
         • 인원: {}\n\
         • 희망날짜: {}\n\
         • 희망시간: {}\n\
         • 연락처: {}\n\n\
         📞 담당자가 곧 연락드릴 예정입니다.\n\
         ⏰ 상담시간: 평일 9:00-18:00",
        record.people_count, record.preferred_date, record.preferred_time, record.contact_number,
    );
    SkillResponse::simple_text(text)
}

pub fn fallback_reply() -> SkillResponse {
    SkillResponse::simple_text(FALLBACK_TEXT)
}
