use indoc::indoc;

pub(super) struct DefaultTemplate {
    pub name: &'static str,
    pub subject: &'static str,
    pub body: &'static str,
}

pub(super) const DEFAULT_TEMPLATES: [DefaultTemplate; 4] = [
    DefaultTemplate {
        name: "CLAIM_CONFIRMATION",
        subject: "Thank you for claiming {{gift_name}}",
        body: indoc! {"
            Hello {{claimant_name}},

            you have claimed {{quantity}} x {{gift_name}} for the {{campaign_name}} campaign.
            Please drop it off before {{deadline}}.
        "},
    },
    DefaultTemplate {
        name: "CLAIM_CANCELLED",
        subject: "Your claim of {{gift_name}} was cancelled",
        body: indoc! {"
            Hello {{claimant_name}},

            your claim of {{quantity}} x {{gift_name}} has been cancelled and the gift is
            available to other donors again.
        "},
    },
    DefaultTemplate {
        name: "CAMPAIGN_INVITATION",
        subject: "Join the {{campaign_name}} campaign",
        body: indoc! {"
            Hello,

            {{organisation_name}} invites you to support families in the {{campaign_name}}
            campaign. Browse the wish list and claim a gift: {{campaign_link}}
        "},
    },
    DefaultTemplate {
        name: "GIFT_REMINDER",
        subject: "Reminder: {{gift_name}} is due soon",
        body: indoc! {"
            Hello {{claimant_name}},

            this is a reminder that {{quantity}} x {{gift_name}} should be dropped off
            before {{deadline}}.
        "},
    },
];
