// src/messages.rs
//! User-facing strings. The web app is Vietnamese, so are these.

pub const COMPANY_NOT_FOUND: &str = "Không tìm thấy công ty";
pub const REVIEW_NOT_FOUND: &str = "Không tìm thấy đánh giá";
pub const STUDENT_NOT_FOUND: &str = "Không tìm thấy thông tin sinh viên";
pub const VOTE_NOT_FOUND: &str = "Vote không tồn tại";
pub const POST_NOT_FOUND: &str = "Không tìm thấy bài viết";
pub const COMMENT_NOT_FOUND: &str = "Không tìm thấy comment";

pub const MISSING_REVIEW: &str = "Thiếu thông tin đánh giá";
pub const MISSING_REPLY: &str = "Thiếu thông tin trả lời";
pub const MISSING_COMMENT: &str = "Thiếu thông tin comment";
pub const MISSING_VOTE: &str = "Thiếu thông tin vote";
pub const MISSING_VOTE_TYPE: &str = "Thiếu thông tin type";
pub const INVALID_VOTE_TYPE: &str = "Loại vote không hợp lệ";
pub const MISSING_POST_ID: &str = "postId is required";

pub const REVIEW_ADDED: &str = "Thêm đánh giá thành công";
pub const REPLY_ADDED: &str = "Thêm trả lời thành công";
pub const COMMENT_CREATED: &str = "Tạo comment thành công";
pub const VOTE_CREATED: &str = "Tạo vote thành công";
pub const VOTE_UPDATED: &str = "Cập nhật vote thành công";
pub const UPVOTE_ACCEPTED: &str = "Upvote thành công";
pub const DOWNVOTE_ACCEPTED: &str = "Downvote thành công";

pub const INTERNAL_ERROR: &str = "Internal server error";
pub const BAD_REQUEST: &str = "Invalid request format";
pub const ROUTE_NOT_FOUND: &str = "Route not found";

// Match reasons
pub const REASON_LANGUAGE: &str = "Có kỹ năng tiếng Anh phù hợp";
pub const REASON_SKILLS: &str = "Có kỹ năng phù hợp";
pub const REASON_MAJORS: &str = "Chuyên ngành phù hợp";
pub const REASON_UNIVERSITY: &str = "Trường đại học phù hợp";
pub const REASON_DEFAULT: &str = "Có vị trí phù hợp với sinh viên";

pub const ENGLISH_MARKER: &str = "Tiếng Anh";
pub const COMPANY_REPRESENTATIVE: &str = "Đại diện công ty";
pub const UNKNOWN_AUTHOR: &str = "Unknown User";
pub const INVALID_DATE: &str = "Invalid Date";
