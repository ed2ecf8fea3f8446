pub const QUERY_GET_USER: &str = r#"
SELECT id,email,full_name,account_role,created_at FROM user_app WHERE id=$1;
"#;

pub const QUERY_INSERT_USER: &str = r#"
INSERT INTO user_app(id,email,full_name,account_role,created_at) VALUES($1,$2,$3,$4,$5);
"#;

// pets

pub const QUERY_GET_PETS_BY_OWNER: &str = r#"
SELECT id,owner_id,name,species,breed,birth_date,created_at,updated_at
FROM pet
WHERE owner_id=$1
ORDER BY created_at DESC;
"#;

pub const QUERY_LIST_PETS: &str = r#"
SELECT id,owner_id,name,species,breed,birth_date,created_at,updated_at
FROM pet
ORDER BY created_at DESC
LIMIT $1 OFFSET $2;
"#;

pub const QUERY_GET_PET: &str = r#"
SELECT id,owner_id,name,species,breed,birth_date,created_at,updated_at
FROM pet
WHERE id=$1;
"#;

pub const QUERY_INSERT_PET: &str = r#"
INSERT INTO pet(id,owner_id,name,species,breed,birth_date,created_at,updated_at)
VALUES($1,$2,$3,$4,$5,$6,$7,$8);
"#;

pub const QUERY_UPDATE_PET: &str = r#"
UPDATE pet SET name=$2,species=$3,breed=$4,birth_date=$5,updated_at=$6 WHERE id=$1;
"#;

// medicines

pub const QUERY_LIST_MEDICINES: &str = r#"
SELECT id,name,concentration,unit,description,manufacturer,price,created_at,updated_at
FROM medicine
ORDER BY name ASC
LIMIT $1 OFFSET $2;
"#;

pub const QUERY_GET_MEDICINE: &str = r#"
SELECT id,name,concentration,unit,description,manufacturer,price,created_at,updated_at
FROM medicine
WHERE id=$1;
"#;

pub const QUERY_INSERT_MEDICINE: &str = r#"
INSERT INTO medicine(
    id,name,concentration,unit,description,manufacturer,price,created_at,updated_at
) VALUES($1,$2,$3,$4,$5,$6,$7,$8,$9);
"#;

pub const QUERY_UPDATE_MEDICINE: &str = r#"
UPDATE medicine SET
    name=$2,concentration=$3,unit=$4,description=$5,manufacturer=$6,price=$7,updated_at=$8
WHERE id=$1;
"#;

// medication packages, joined with their medicine (m_ prefix)

const SELECT_MEDICATION_PACKAGE: &str = r#"
SELECT
    mp.id,mp.medicine_id,mp.package_name,mp.quantity,mp.unit_price,
    mp.batch_number,mp.expiry_date,mp.created_at,mp.updated_at,
    m.id AS m_id,m.name AS m_name,m.concentration AS m_concentration,m.unit AS m_unit,
    m.description AS m_description,m.manufacturer AS m_manufacturer,m.price AS m_price,
    m.created_at AS m_created_at,m.updated_at AS m_updated_at
FROM medication_package AS mp
INNER JOIN medicine AS m ON (m.id = mp.medicine_id)
"#;

pub fn query_list_medication_packages() -> String {
    format!("{SELECT_MEDICATION_PACKAGE} ORDER BY mp.created_at DESC LIMIT $1 OFFSET $2;")
}

pub fn query_get_medication_package() -> String {
    format!("{SELECT_MEDICATION_PACKAGE} WHERE mp.id=$1;")
}

pub fn query_get_medication_packages_by_medicine() -> String {
    format!("{SELECT_MEDICATION_PACKAGE} WHERE mp.medicine_id=$1 ORDER BY mp.expiry_date ASC;")
}

pub const QUERY_INSERT_MEDICATION_PACKAGE: &str = r#"
INSERT INTO medication_package(
    id,medicine_id,package_name,quantity,unit_price,batch_number,expiry_date,created_at,updated_at
) VALUES($1,$2,$3,$4,$5,$6,$7,$8,$9);
"#;

pub const QUERY_UPDATE_MEDICATION_PACKAGE: &str = r#"
UPDATE medication_package SET
    medicine_id=$2,package_name=$3,quantity=$4,unit_price=$5,
    batch_number=$6,expiry_date=$7,updated_at=$8
WHERE id=$1;
"#;

// prescriptions

pub const QUERY_GET_MEDICAL_RECORD: &str = r#"
SELECT id,pet_id,diagnosis,created_at FROM medical_record WHERE id=$1;
"#;

pub const QUERY_LIST_PRESCRIPTIONS: &str = r#"
SELECT id,medical_record_id,notes,prescribed_at,created_at,updated_at
FROM prescription
ORDER BY prescribed_at DESC
LIMIT $1 OFFSET $2;
"#;

pub const QUERY_GET_PRESCRIPTION: &str = r#"
SELECT id,medical_record_id,notes,prescribed_at,created_at,updated_at
FROM prescription
WHERE id=$1;
"#;

pub const QUERY_GET_PRESCRIPTIONS_BY_MEDICAL_RECORD: &str = r#"
SELECT id,medical_record_id,notes,prescribed_at,created_at,updated_at
FROM prescription
WHERE medical_record_id=$1
ORDER BY prescribed_at DESC;
"#;

pub const QUERY_INSERT_PRESCRIPTION: &str = r#"
INSERT INTO prescription(id,medical_record_id,notes,prescribed_at,created_at,updated_at)
VALUES($1,$2,$3,$4,$5,$6);
"#;

pub const QUERY_UPDATE_PRESCRIPTION: &str = r#"
UPDATE prescription SET medical_record_id=$2,notes=$3,prescribed_at=$4,updated_at=$5 WHERE id=$1;
"#;

// prescription details, joined with package (p_ prefix) and medicine (m_ prefix)

const SELECT_PRESCRIPTION_DETAIL: &str = r#"
SELECT
    pd.prescription_id,pd.medication_package_id,pd.quantity,pd.dosage,pd.instructions,
    mp.id AS p_id,mp.medicine_id AS p_medicine_id,mp.package_name AS p_package_name,
    mp.quantity AS p_quantity,mp.unit_price AS p_unit_price,mp.batch_number AS p_batch_number,
    mp.expiry_date AS p_expiry_date,mp.created_at AS p_created_at,mp.updated_at AS p_updated_at,
    m.id AS m_id,m.name AS m_name,m.concentration AS m_concentration,m.unit AS m_unit,
    m.description AS m_description,m.manufacturer AS m_manufacturer,m.price AS m_price,
    m.created_at AS m_created_at,m.updated_at AS m_updated_at
FROM prescription_detail AS pd
INNER JOIN medication_package AS mp ON (mp.id = pd.medication_package_id)
INNER JOIN medicine AS m ON (m.id = mp.medicine_id)
"#;

pub fn query_get_prescription_details() -> String {
    format!("{SELECT_PRESCRIPTION_DETAIL} WHERE pd.prescription_id=$1 ORDER BY m.name ASC;")
}

pub fn query_get_prescription_detail() -> String {
    format!(
        "{SELECT_PRESCRIPTION_DETAIL} WHERE pd.prescription_id=$1 AND pd.medication_package_id=$2;"
    )
}

pub const QUERY_INSERT_PRESCRIPTION_DETAIL: &str = r#"
INSERT INTO prescription_detail(prescription_id,medication_package_id,quantity,dosage,instructions)
VALUES($1,$2,$3,$4,$5);
"#;

pub const QUERY_UPDATE_PRESCRIPTION_DETAIL: &str = r#"
UPDATE prescription_detail SET quantity=$3,dosage=$4,instructions=$5
WHERE prescription_id=$1 AND medication_package_id=$2;
"#;

pub const QUERY_DELETE_PRESCRIPTION_DETAIL: &str = r#"
DELETE FROM prescription_detail WHERE prescription_id=$1 AND medication_package_id=$2;
"#;

// rooms

pub const QUERY_LIST_ROOMS: &str = r#"
SELECT id,name,room_type,capacity,price_per_day,status,description,created_at,updated_at
FROM room
ORDER BY name ASC
LIMIT $1 OFFSET $2;
"#;

pub const QUERY_GET_ROOM: &str = r#"
SELECT id,name,room_type,capacity,price_per_day,status,description,created_at,updated_at
FROM room
WHERE id=$1;
"#;

/// Rooms marked available with no active reservation overlapping [$1, $2).
/// With both bounds NULL only the room status is checked.
pub const QUERY_GET_AVAILABLE_ROOMS: &str = r#"
SELECT r.id,r.name,r.room_type,r.capacity,r.price_per_day,r.status,r.description,
    r.created_at,r.updated_at
FROM room AS r
WHERE r.status = 'AVAILABLE'
    AND ($1 IS NULL OR $2 IS NULL OR NOT EXISTS (
        SELECT 1 FROM boarding_reservation AS br
        WHERE br.room_id = r.id
            AND br.status IN ('PENDING','CONFIRMED')
            AND br.start_date < $2
            AND br.end_date > $1
    ))
ORDER BY r.name ASC;
"#;

pub const QUERY_INSERT_ROOM: &str = r#"
INSERT INTO room(
    id,name,room_type,capacity,price_per_day,status,description,created_at,updated_at
) VALUES($1,$2,$3,$4,$5,$6,$7,$8,$9);
"#;

pub const QUERY_UPDATE_ROOM: &str = r#"
UPDATE room SET
    name=$2,room_type=$3,capacity=$4,price_per_day=$5,status=$6,description=$7,updated_at=$8
WHERE id=$1;
"#;

// service options

pub const QUERY_LIST_SERVICE_OPTIONS: &str = r#"
SELECT id,name,price,duration_minutes FROM service_option ORDER BY name ASC;
"#;

pub const QUERY_GET_SERVICE_OPTION: &str = r#"
SELECT id,name,price,duration_minutes FROM service_option WHERE id=$1;
"#;

pub const QUERY_INSERT_SERVICE_OPTION: &str = r#"
INSERT INTO service_option(id,name,price,duration_minutes) VALUES($1,$2,$3,$4);
"#;

pub const QUERY_UPDATE_SERVICE_OPTION: &str = r#"
UPDATE service_option SET name=$2,price=$3,duration_minutes=$4 WHERE id=$1;
"#;

// service bookings, joined with pet (pet_ prefix) and service option (so_ prefix)

const SELECT_SERVICE_BOOKING: &str = r#"
SELECT
    sb.id,sb.pet_id,sb.service_option_id,sb.booking_date,sb.status,sb.notes,
    sb.created_at,sb.updated_at,
    p.owner_id AS pet_owner_id,p.name AS pet_name,p.species AS pet_species,
    so.name AS so_name,so.price AS so_price,so.duration_minutes AS so_duration_minutes
FROM service_booking AS sb
INNER JOIN pet AS p ON (p.id = sb.pet_id)
INNER JOIN service_option AS so ON (so.id = sb.service_option_id)
"#;

pub fn query_list_service_bookings() -> String {
    format!("{SELECT_SERVICE_BOOKING} ORDER BY sb.booking_date DESC LIMIT $1 OFFSET $2;")
}

pub fn query_get_service_booking() -> String {
    format!("{SELECT_SERVICE_BOOKING} WHERE sb.id=$1;")
}

pub fn query_get_service_bookings_by_pet() -> String {
    format!("{SELECT_SERVICE_BOOKING} WHERE sb.pet_id=$1 ORDER BY sb.booking_date DESC;")
}

pub const QUERY_INSERT_SERVICE_BOOKING: &str = r#"
INSERT INTO service_booking(
    id,pet_id,service_option_id,booking_date,status,notes,created_at,updated_at
) VALUES($1,$2,$3,$4,$5,$6,$7,$8);
"#;

pub const QUERY_UPDATE_SERVICE_BOOKING: &str = r#"
UPDATE service_booking SET
    service_option_id=$2,booking_date=$3,status=$4,notes=$5,updated_at=$6
WHERE id=$1;
"#;

// boarding reservations, joined with pet (pet_ prefix) and room (r_ prefix)

const SELECT_BOARDING_RESERVATION: &str = r#"
SELECT
    br.id,br.pet_id,br.room_id,br.start_date,br.end_date,br.status,br.notes,
    br.created_at,br.updated_at,
    p.owner_id AS pet_owner_id,p.name AS pet_name,p.species AS pet_species,
    r.name AS r_name,r.room_type AS r_room_type,r.capacity AS r_capacity,
    r.price_per_day AS r_price_per_day,r.status AS r_status,r.description AS r_description,
    r.created_at AS r_created_at,r.updated_at AS r_updated_at
FROM boarding_reservation AS br
INNER JOIN pet AS p ON (p.id = br.pet_id)
INNER JOIN room AS r ON (r.id = br.room_id)
"#;

pub fn query_list_boarding_reservations() -> String {
    format!("{SELECT_BOARDING_RESERVATION} ORDER BY br.start_date DESC LIMIT $1 OFFSET $2;")
}

pub fn query_get_boarding_reservation() -> String {
    format!("{SELECT_BOARDING_RESERVATION} WHERE br.id=$1;")
}

pub fn query_get_boarding_reservations_by_pet() -> String {
    format!("{SELECT_BOARDING_RESERVATION} WHERE br.pet_id=$1 ORDER BY br.start_date DESC;")
}

pub const QUERY_INSERT_BOARDING_RESERVATION: &str = r#"
INSERT INTO boarding_reservation(
    id,pet_id,room_id,start_date,end_date,status,notes,created_at,updated_at
) VALUES($1,$2,$3,$4,$5,$6,$7,$8,$9);
"#;

pub const QUERY_UPDATE_BOARDING_RESERVATION: &str = r#"
UPDATE boarding_reservation SET
    room_id=$2,start_date=$3,end_date=$4,status=$5,notes=$6,updated_at=$7
WHERE id=$1;
"#;

// notifications

pub const QUERY_LIST_NOTIFICATIONS: &str = r#"
SELECT id,title,message,notification_type,created_at
FROM notification
ORDER BY created_at DESC
LIMIT $1 OFFSET $2;
"#;

pub const QUERY_GET_NOTIFICATION: &str = r#"
SELECT id,title,message,notification_type,created_at FROM notification WHERE id=$1;
"#;

pub const QUERY_GET_USER_NOTIFICATIONS: &str = r#"
SELECT n.id,n.title,n.message,n.notification_type,n.created_at,nu.is_read,nu.read_at
FROM notification_user AS nu
INNER JOIN notification AS n ON (n.id = nu.notification_id)
WHERE nu.user_id=$1
ORDER BY n.created_at DESC;
"#;

pub const QUERY_COUNT_UNREAD_NOTIFICATIONS: &str = r#"
SELECT COUNT(*) FROM notification_user WHERE user_id=$1 AND is_read=0;
"#;

pub const QUERY_INSERT_NOTIFICATION: &str = r#"
INSERT INTO notification(id,title,message,notification_type,created_at) VALUES($1,$2,$3,$4,$5);
"#;

pub const QUERY_INSERT_NOTIFICATION_USER: &str = r#"
INSERT INTO notification_user(notification_id,user_id,is_read,read_at) VALUES($1,$2,0,NULL);
"#;

pub const QUERY_UPDATE_NOTIFICATION: &str = r#"
UPDATE notification SET title=$2,message=$3,notification_type=$4 WHERE id=$1;
"#;

pub const QUERY_MARK_NOTIFICATION_READ: &str = r#"
UPDATE notification_user SET is_read=1,read_at=COALESCE(read_at,$3)
WHERE user_id=$1 AND notification_id=$2;
"#;

pub const QUERY_MARK_ALL_NOTIFICATIONS_READ: &str = r#"
UPDATE notification_user SET is_read=1,read_at=$2 WHERE user_id=$1 AND is_read=0;
"#;
