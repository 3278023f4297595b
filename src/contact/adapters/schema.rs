//! Diesel schema for contact-submission persistence.

diesel::table! {
    /// Visitor contact submissions, append-only.
    contacts (id) {
        /// Submission identifier.
        id -> Uuid,
        /// Visitor-supplied name, stored verbatim.
        name -> Text,
        /// Visitor-supplied email address, stored verbatim.
        email -> Text,
        /// Visitor-supplied message body, stored verbatim.
        message -> Text,
        /// When the store received the submission.
        submitted_at -> Timestamptz,
        /// Monotonic insertion sequence; tie-break for equal timestamps.
        insertion_seq -> Int8,
    }
}
