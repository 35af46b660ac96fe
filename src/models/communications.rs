//! Online meetings and calls

use super::Entity;
use chrono::{DateTime, FixedOffset};

graph_enum! {
    pub enum Modality {
        Unknown => "unknown",
        Audio => "audio",
        Video => "video",
        VideoBasedScreenSharing => "videoBasedScreenSharing",
        Data => "data",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum OnlineMeetingPresenters {
        Everyone => "everyone",
        Organization => "organization",
        RoleIsPresenter => "roleIsPresenter",
        Organizer => "organizer",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum OnlineMeetingRole {
        Attendee => "attendee",
        Presenter => "presenter",
        UnknownFutureValue => "unknownFutureValue",
        Producer => "producer",
        Coorganizer => "coorganizer",
    }
}

graph_enum! {
    pub enum MeetingCapabilities {
        QuestionAndAnswer => "questionAndAnswer",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    /// Who can bypass the meeting lobby
    pub enum LobbyBypassScope {
        Organizer => "organizer",
        Organization => "organization",
        OrganizationAndFederated => "organizationAndFederated",
        Everyone => "everyone",
        UnknownFutureValue => "unknownFutureValue",
        Invited => "invited",
        OrganizationExcludingGuests => "organizationExcludingGuests",
    }
}

graph_enum! {
    pub enum BodyType {
        Text => "text",
        Html => "html",
    }
}

graph_enum! {
    pub enum CallState {
        Incoming => "incoming",
        Establishing => "establishing",
        Ringing => "ringing",
        Established => "established",
        Hold => "hold",
        Transferring => "transferring",
        TransferAccepted => "transferAccepted",
        Redirecting => "redirecting",
        Terminating => "terminating",
        Terminated => "terminated",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum CallDirection {
        Incoming => "incoming",
        Outgoing => "outgoing",
    }
}

graph_model! {
    pub struct ChatInfo {
        /// The unique identifier of a message in a Microsoft Teams channel.
        "messageId" => message_id / set_message_id: String,
        "replyChainMessageId" => reply_chain_message_id / set_reply_chain_message_id: String,
        /// The unique identifier for a thread in Microsoft Teams.
        "threadId" => thread_id / set_thread_id: String,
    }
}

graph_model! {
    pub struct ItemBody {
        "content" => content / set_content: String,
        "contentType" => content_type / set_content_type: BodyType,
    }
}

graph_model! {
    /// Dial-in information for an online meeting
    pub struct AudioConferencing {
        "conferenceId" => conference_id / set_conference_id: String,
        "dialinUrl" => dialin_url / set_dialin_url: String,
        "tollFreeNumber" => toll_free_number / set_toll_free_number: String,
        "tollFreeNumbers" => toll_free_numbers / set_toll_free_numbers: Vec<String>,
        "tollNumber" => toll_number / set_toll_number: String,
        "tollNumbers" => toll_numbers / set_toll_numbers: Vec<String>,
    }
}

graph_model! {
    pub struct JoinMeetingIdSettings {
        "isPasscodeRequired" => is_passcode_required / set_is_passcode_required: bool,
        "joinMeetingId" => join_meeting_id / set_join_meeting_id: String,
        "passcode" => passcode / set_passcode: String,
    }
}

graph_model! {
    pub struct LobbyBypassSettings {
        /// Whether or not to always let dial-in callers bypass the lobby.
        "isDialInBypassEnabled" => is_dial_in_bypass_enabled / set_is_dial_in_bypass_enabled: bool,
        "scope" => scope / set_scope: LobbyBypassScope,
    }
}

graph_model! {
    /// A participant of a meeting. The identity set stays in additional data.
    pub struct MeetingParticipantInfo {
        "role" => role / set_role: OnlineMeetingRole,
        /// User principal name of the participant.
        "upn" => upn / set_upn: String,
    }
}

graph_model! {
    pub struct MeetingParticipants {
        "attendees" => attendees / set_attendees: Vec<MeetingParticipantInfo>,
        "contributors" => contributors / set_contributors: Vec<MeetingParticipantInfo>,
        "organizer" => organizer / set_organizer: MeetingParticipantInfo,
        "producers" => producers / set_producers: Vec<MeetingParticipantInfo>,
    }
}

graph_model! {
    pub struct OnlineMeeting: Entity {
        "allowAttendeeToEnableCamera" => allow_attendee_to_enable_camera / set_allow_attendee_to_enable_camera: bool,
        "allowAttendeeToEnableMic" => allow_attendee_to_enable_mic / set_allow_attendee_to_enable_mic: bool,
        "allowedPresenters" => allowed_presenters / set_allowed_presenters: OnlineMeetingPresenters,
        "allowTeamworkReactions" => allow_teamwork_reactions / set_allow_teamwork_reactions: bool,
        "anonymizeIdentityForRoles" => anonymize_identity_for_roles / set_anonymize_identity_for_roles: Vec<OnlineMeetingRole>,
        /// The phone access (dial-in) information for an online meeting. Read-only.
        "audioConferencing" => audio_conferencing / set_audio_conferencing: AudioConferencing,
        "capabilities" => capabilities / set_capabilities: Vec<MeetingCapabilities>,
        "chatInfo" => chat_info / set_chat_info: ChatInfo,
        "creationDateTime" => creation_date_time / set_creation_date_time: DateTime<FixedOffset>,
        "endDateTime" => end_date_time / set_end_date_time: DateTime<FixedOffset>,
        "externalId" => external_id / set_external_id: String,
        "isBroadcast" => is_broadcast / set_is_broadcast: bool,
        "isEntryExitAnnounced" => is_entry_exit_announced / set_is_entry_exit_announced: bool,
        "joinInformation" => join_information / set_join_information: ItemBody,
        "joinMeetingIdSettings" => join_meeting_id_settings / set_join_meeting_id_settings: JoinMeetingIdSettings,
        "joinUrl" => join_url / set_join_url: String,
        "joinWebUrl" => join_web_url / set_join_web_url: String,
        "lobbyBypassSettings" => lobby_bypass_settings / set_lobby_bypass_settings: LobbyBypassSettings,
        "participants" => participants / set_participants: MeetingParticipants,
        "recordAutomatically" => record_automatically / set_record_automatically: bool,
        "startDateTime" => start_date_time / set_start_date_time: DateTime<FixedOffset>,
        "subject" => subject / set_subject: String,
        "videoTeleconferenceId" => video_teleconference_id / set_video_teleconference_id: String,
    }
}

graph_model! {
    pub struct Call: Entity {
        "activeModalities" => active_modalities / set_active_modalities: Vec<Modality>,
        "callbackUri" => callback_uri / set_callback_uri: String,
        /// A unique identifier for all the participant calls in a conference or a unique
        /// identifier for two participant calls in a P2P call.
        "callChainId" => call_chain_id / set_call_chain_id: String,
        "chatInfo" => chat_info / set_chat_info: ChatInfo,
        "direction" => direction / set_direction: CallDirection,
        "myParticipantId" => my_participant_id / set_my_participant_id: String,
        "requestedModalities" => requested_modalities / set_requested_modalities: Vec<Modality>,
        "ringingTimeoutInSeconds" => ringing_timeout_in_seconds / set_ringing_timeout_in_seconds: i32,
        "state" => state / set_state: CallState,
        "subject" => subject / set_subject: String,
        "tenantId" => tenant_id / set_tenant_id: String,
    }
}
