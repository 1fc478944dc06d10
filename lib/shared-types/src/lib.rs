//! Strongly typed identifiers shared between the core, the data provider and the server.

mod macros;

use macros::uuid_newtype;

uuid_newtype!(OrganisationId);
uuid_newtype!(CampaignId);
uuid_newtype!(FamilyId);
uuid_newtype!(PersonId);
uuid_newtype!(GiftId);
uuid_newtype!(
    /// Identifies a single reservation of gift units.
    ClaimId
);
uuid_newtype!(EmailTemplateId);
