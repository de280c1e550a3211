use crate::domain::{
    common::{GetPaginated, services::Service},
    folder::{
        entities::{Folder, FolderId, FruitType},
        ports::MockFolderRepository,
    },
    health::port::MockHealthRepository,
    message::{
        entities::{
            ANONYMOUS_NICKNAME, ANONYMOUS_PROFILE_IMAGE, CreateMessageRequest, InsertMessageInput,
            MessageId,
        },
        ports::{MessageRepository, MessageService, MockMessageRepository},
    },
    user::{
        entities::{GUEST_SENDER_ID, User, UserId},
        ports::MockUserRepository,
    },
};

type MockService =
    Service<MockUserRepository, MockFolderRepository, MockMessageRepository, MockHealthRepository>;

fn setup() -> (
    MockUserRepository,
    MockFolderRepository,
    MockMessageRepository,
    MockService,
) {
    let user_repo = MockUserRepository::new();
    let folder_repo = MockFolderRepository::new();
    let message_repo = MockMessageRepository::new();
    let service = Service::new(
        user_repo.clone(),
        folder_repo.clone(),
        message_repo.clone(),
        MockHealthRepository::new(),
    );
    (user_repo, folder_repo, message_repo, service)
}

fn seed_user(repo: &MockUserRepository, id: i64, nickname: &str) -> UserId {
    repo.insert(User {
        id: UserId(id),
        nickname: nickname.to_string(),
        user_image: format!("{nickname}.png"),
    });
    UserId(id)
}

fn seed_folder(repo: &MockFolderRepository, id: i64, user_id: UserId, fruit: FruitType) -> FolderId {
    repo.insert(Folder {
        id: FolderId(id),
        user_id,
        name: format!("tree-{id}"),
        fruit,
    });
    FolderId(id)
}

async fn seed_message(
    repo: &MockMessageRepository,
    user_id: UserId,
    sender_id: UserId,
    folder_id: FolderId,
    content: &str,
    anonymous: bool,
) -> MessageId {
    let message = repo
        .insert(InsertMessageInput {
            user_id,
            sender_id,
            folder_id,
            content: content.to_string(),
            anonymous,
            already_read: false,
        })
        .await
        .expect("seeding a message failed");
    message.id
}

// == Create Message (watering) Tests ==

#[tokio::test]
async fn test_create_message_success() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Custom);

    let id = service
        .create_message(
            sender,
            CreateMessageRequest {
                receiver_id: receiver,
                folder_id: Some(folder),
                anonymous: false,
                content: "you did great today".to_string(),
            },
        )
        .await
        .expect("create_message returned an error");

    let message = message_repo.find_by_id(&id).await?.expect("message missing");
    assert_eq!(message.user_id, receiver, "Expected correct recipient");
    assert_eq!(message.sender_id, sender, "Expected correct sender");
    assert_eq!(message.folder_id, folder, "Expected the requested folder");
    assert!(!message.anonymous, "Expected non-anonymous message");
    assert!(!message.already_read, "Expected unread message");
    assert!(!message.opening, "New messages start unopened");
    assert!(!message.favorite, "New messages start unfavorited");

    Ok(())
}

#[tokio::test]
async fn test_create_message_receiver_not_found() {
    let (user_repo, _, _, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");

    let error = service
        .create_message(
            sender,
            CreateMessageRequest {
                receiver_id: UserId(404),
                folder_id: None,
                anonymous: false,
                content: "hello".to_string(),
            },
        )
        .await
        .expect_err("create_message should have returned an error");

    assert_eq!(error.error_code(), "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_create_message_rejects_empty_content() {
    let (user_repo, folder_repo, _, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    let error = service
        .create_message(
            sender,
            CreateMessageRequest {
                receiver_id: receiver,
                folder_id: None,
                anonymous: false,
                content: "   ".to_string(),
            },
        )
        .await
        .expect_err("create_message should have returned an error");

    assert_eq!(error.error_code(), "INVALID_INPUT_VALUE");
}

#[tokio::test]
async fn test_create_message_guest_sender_forces_anonymous(
) -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let receiver = seed_user(&user_repo, 2, "receiver");
    seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    // The request explicitly asks for a non-anonymous message.
    let id = service
        .create_message(
            GUEST_SENDER_ID,
            CreateMessageRequest {
                receiver_id: receiver,
                folder_id: None,
                anonymous: false,
                content: "from a stranger".to_string(),
            },
        )
        .await?;

    let message = message_repo.find_by_id(&id).await?.expect("message missing");
    assert!(
        message.anonymous,
        "Guest-sent messages must always be anonymous"
    );

    Ok(())
}

#[tokio::test]
async fn test_create_message_self_send_forces_already_read(
) -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let me = seed_user(&user_repo, 7, "me");
    seed_folder(&folder_repo, 10, me, FruitType::Default);

    let id = service
        .create_message(
            me,
            CreateMessageRequest {
                receiver_id: me,
                folder_id: None,
                anonymous: false,
                content: "note to self".to_string(),
            },
        )
        .await?;

    let message = message_repo.find_by_id(&id).await?.expect("message missing");
    assert!(
        message.already_read,
        "Self-sent messages must start out read"
    );

    Ok(())
}

#[tokio::test]
async fn test_create_message_defaults_to_receiver_default_folder(
) -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let default_folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);
    seed_folder(&folder_repo, 11, receiver, FruitType::Custom);

    let id = service
        .create_message(
            sender,
            CreateMessageRequest {
                receiver_id: receiver,
                folder_id: None,
                anonymous: false,
                content: "keep going".to_string(),
            },
        )
        .await?;

    let message = message_repo.find_by_id(&id).await?.expect("message missing");
    assert_eq!(
        message.folder_id, default_folder,
        "Omitted folder_id must fall back to the receiver's default tree"
    );

    Ok(())
}

#[tokio::test]
async fn test_create_message_unknown_folder() {
    let (user_repo, _, _, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");

    let error = service
        .create_message(
            sender,
            CreateMessageRequest {
                receiver_id: receiver,
                folder_id: Some(FolderId(999)),
                anonymous: false,
                content: "hello".to_string(),
            },
        )
        .await
        .expect_err("create_message should have returned an error");

    assert_eq!(error.error_code(), "TREE_NOT_FOUND");
}

#[tokio::test]
async fn test_create_message_missing_default_folder() {
    let (user_repo, _, _, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");

    let error = service
        .create_message(
            sender,
            CreateMessageRequest {
                receiver_id: receiver,
                folder_id: None,
                anonymous: false,
                content: "hello".to_string(),
            },
        )
        .await
        .expect_err("create_message should have returned an error");

    assert_eq!(error.error_code(), "TREE_NOT_FOUND");
}

// == Message Box Listing Tests ==

#[tokio::test]
async fn test_list_messages_masks_anonymous_sender() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    seed_message(&message_repo, receiver, sender, folder, "secret fan", true).await;

    let page = service
        .list_messages(&receiver, None, &GetPaginated::default())
        .await?;

    assert_eq!(page.messages.len(), 1);
    let row = &page.messages[0];
    assert_eq!(
        row.sender_nickname, ANONYMOUS_NICKNAME,
        "Anonymous messages must never expose the sender's nickname"
    );
    assert_eq!(
        row.sender_profile_image, ANONYMOUS_PROFILE_IMAGE,
        "Anonymous messages must never expose the sender's image"
    );

    Ok(())
}

#[tokio::test]
async fn test_list_messages_resolves_real_sender() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "cheerful_friend");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    seed_message(&message_repo, receiver, sender, folder, "nice work", false).await;

    let page = service
        .list_messages(&receiver, None, &GetPaginated::default())
        .await?;

    assert_eq!(page.messages[0].sender_nickname, "cheerful_friend");
    assert_eq!(page.messages[0].sender_profile_image, "cheerful_friend.png");

    Ok(())
}

#[tokio::test]
async fn test_list_messages_dangling_sender_fails() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    // Sender id 999 has no user row and the message is not anonymous.
    seed_message(&message_repo, receiver, UserId(999), folder, "hi", false).await;

    let error = service
        .list_messages(&receiver, None, &GetPaginated::default())
        .await
        .expect_err("list_messages should have returned an error");

    assert_eq!(error.error_code(), "USER_NOT_FOUND");

    Ok(())
}

#[tokio::test]
async fn test_list_messages_has_next_at_page_boundary() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    // Exactly one message past the first page.
    for i in 0..6 {
        seed_message(
            &message_repo,
            receiver,
            sender,
            folder,
            &format!("message {i}"),
            false,
        )
        .await;
    }

    let pagination = GetPaginated { page: 1, limit: 5 };
    let first = service
        .list_messages(&receiver, Some(folder), &pagination)
        .await?;
    assert_eq!(first.messages.len(), 5, "Expected a full first page");
    assert!(first.has_next, "Expected a next page after the first");

    let pagination = GetPaginated { page: 2, limit: 5 };
    let second = service
        .list_messages(&receiver, Some(folder), &pagination)
        .await?;
    assert_eq!(second.messages.len(), 1, "Expected the single leftover row");
    assert!(!second.has_next, "Expected no page after the second");

    Ok(())
}

#[tokio::test]
async fn test_list_messages_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    let first = seed_message(&message_repo, receiver, sender, folder, "oldest", false).await;
    let second = seed_message(&message_repo, receiver, sender, folder, "middle", false).await;
    let third = seed_message(&message_repo, receiver, sender, folder, "newest", false).await;

    let page = service
        .list_messages(&receiver, None, &GetPaginated::default())
        .await?;

    let ids: Vec<MessageId> = page.messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![third, second, first], "Expected newest first");

    Ok(())
}

// == Opening (fruiting) Tests ==

#[tokio::test]
async fn test_update_opening_rejects_more_than_eight() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    let mut ids = Vec::new();
    for i in 0..9 {
        ids.push(seed_message(&message_repo, receiver, sender, folder, &format!("m{i}"), false).await);
    }

    // Pre-open one message so we can verify nothing was cleared.
    service.update_opening(&receiver, &ids[..1]).await?;

    let error = service
        .update_opening(&receiver, &ids)
        .await
        .expect_err("update_opening should have rejected nine ids");

    assert_eq!(error.error_code(), "INVALID_INPUT_VALUE");
    let untouched = message_repo
        .find_by_id(&ids[0])
        .await?
        .expect("message missing");
    assert!(
        untouched.opening,
        "A rejected request must not clear the previously opened set"
    );

    Ok(())
}

#[tokio::test]
async fn test_update_opening_replaces_set_exactly() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    let mut ids = Vec::new();
    for i in 0..4 {
        ids.push(seed_message(&message_repo, receiver, sender, folder, &format!("m{i}"), false).await);
    }

    service.update_opening(&receiver, &ids[..2]).await?;
    service.update_opening(&receiver, &ids[2..]).await?;

    for (i, id) in ids.iter().enumerate() {
        let message = message_repo.find_by_id(id).await?.expect("message missing");
        assert_eq!(
            message.opening,
            i >= 2,
            "The opened set must equal exactly the last requested ids"
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_update_opening_missing_id_aborts() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    let owned = seed_message(&message_repo, receiver, sender, folder, "mine", false).await;
    service.update_opening(&receiver, &[owned]).await?;

    let error = service
        .update_opening(&receiver, &[owned, MessageId(404)])
        .await
        .expect_err("update_opening should have returned an error");

    assert_eq!(error.error_code(), "MESSAGE_NOT_FOUND");
    let message = message_repo.find_by_id(&owned).await?.expect("message missing");
    assert!(
        message.opening,
        "A failed replacement must leave the previous set intact"
    );

    Ok(())
}

#[tokio::test]
async fn test_update_opening_scoped_to_owner() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let other = seed_user(&user_repo, 3, "other");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);
    let other_folder = seed_folder(&folder_repo, 11, other, FruitType::Default);

    seed_message(&message_repo, receiver, sender, folder, "mine", false).await;
    let foreign = seed_message(&message_repo, other, sender, other_folder, "not mine", false).await;

    let error = service
        .update_opening(&receiver, &[foreign])
        .await
        .expect_err("opening another user's message must fail");

    assert_eq!(error.error_code(), "MESSAGE_NOT_FOUND");
    let message = message_repo
        .find_by_id(&foreign)
        .await?
        .expect("message missing");
    assert!(!message.opening, "The foreign message must stay unopened");

    Ok(())
}

// == Delete Tests ==

#[tokio::test]
async fn test_delete_messages_success() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    let first = seed_message(&message_repo, receiver, sender, folder, "one", false).await;
    let second = seed_message(&message_repo, receiver, sender, folder, "two", false).await;
    let kept = seed_message(&message_repo, receiver, sender, folder, "three", false).await;

    service.delete_messages(&receiver, &[first, second]).await?;

    assert!(message_repo.find_by_id(&first).await?.is_none());
    assert!(message_repo.find_by_id(&second).await?.is_none());
    assert!(
        message_repo.find_by_id(&kept).await?.is_some(),
        "Unlisted messages must survive"
    );

    Ok(())
}

#[tokio::test]
async fn test_delete_messages_foreign_owner_aborts() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let other = seed_user(&user_repo, 3, "other");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);
    let other_folder = seed_folder(&folder_repo, 11, other, FruitType::Default);

    let mine = seed_message(&message_repo, receiver, sender, folder, "mine", false).await;
    let foreign = seed_message(&message_repo, other, sender, other_folder, "theirs", false).await;

    let error = service
        .delete_messages(&receiver, &[mine, foreign])
        .await
        .expect_err("deleting another user's message must fail");

    assert_eq!(error.error_code(), "MESSAGE_NOT_FOUND");
    assert!(
        message_repo.find_by_id(&mine).await?.is_some(),
        "A failed batch delete must not remove anything"
    );
    assert!(message_repo.find_by_id(&foreign).await?.is_some());

    Ok(())
}

// == Move Tests ==

#[tokio::test]
async fn test_move_messages_success() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);
    let target = seed_folder(&folder_repo, 11, receiver, FruitType::Custom);

    let id = seed_message(&message_repo, receiver, sender, folder, "mobile", false).await;

    service.move_messages(&receiver, &[id], &target).await?;

    let message = message_repo.find_by_id(&id).await?.expect("message missing");
    assert_eq!(message.folder_id, target, "Expected the message to move");

    Ok(())
}

#[tokio::test]
async fn test_move_messages_unknown_folder() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    let id = seed_message(&message_repo, receiver, sender, folder, "stays", false).await;

    let error = service
        .move_messages(&receiver, &[id], &FolderId(999))
        .await
        .expect_err("moving to a missing folder must fail");

    assert_eq!(error.error_code(), "TREE_NOT_FOUND");
    let message = message_repo.find_by_id(&id).await?.expect("message missing");
    assert_eq!(
        message.folder_id, folder,
        "A failed move must leave the folder unchanged"
    );

    Ok(())
}

// == Favorite Tests ==

#[tokio::test]
async fn test_toggle_favorite_flips_both_ways() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    let id = seed_message(&message_repo, receiver, sender, folder, "keeper", false).await;

    service.toggle_favorite(&receiver, &id).await?;
    let message = message_repo.find_by_id(&id).await?.expect("message missing");
    assert!(message.favorite, "First toggle must set the flag");

    service.toggle_favorite(&receiver, &id).await?;
    let message = message_repo.find_by_id(&id).await?.expect("message missing");
    assert!(!message.favorite, "Second toggle must clear the flag");

    Ok(())
}

#[tokio::test]
async fn test_toggle_favorite_not_found() {
    let (user_repo, _, _, service) = setup();
    let receiver = seed_user(&user_repo, 2, "receiver");

    let error = service
        .toggle_favorite(&receiver, &MessageId(404))
        .await
        .expect_err("toggle_favorite should have returned an error");

    assert_eq!(error.error_code(), "MESSAGE_NOT_FOUND");
}

#[tokio::test]
async fn test_list_favorites_filters_and_flags_next_page(
) -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    // Six favorites and one plain message, page size five.
    for i in 0..6 {
        let id =
            seed_message(&message_repo, receiver, sender, folder, &format!("fav {i}"), false).await;
        service.toggle_favorite(&receiver, &id).await?;
    }
    seed_message(&message_repo, receiver, sender, folder, "not a favorite", false).await;

    let pagination = GetPaginated { page: 1, limit: 5 };
    let page = service.list_favorites(&receiver, &pagination).await?;

    assert_eq!(page.messages.len(), 5, "Expected a full page of favorites");
    assert!(page.has_next, "Expected PAGE_SIZE+1 favorites to flag a next page");
    assert!(
        page.messages.iter().all(|m| m.favorite),
        "Only favorites may appear"
    );
    // Newest first.
    for pair in page.messages.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }

    let pagination = GetPaginated { page: 2, limit: 5 };
    let page = service.list_favorites(&receiver, &pagination).await?;
    assert_eq!(page.messages.len(), 1);
    assert!(!page.has_next);

    Ok(())
}

#[tokio::test]
async fn test_list_favorites_always_resolves_sender() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "true_identity");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    // Anonymous in the box, but favorites reveal the sender.
    let id = seed_message(&message_repo, receiver, sender, folder, "anon fav", true).await;
    service.toggle_favorite(&receiver, &id).await?;

    let page = service
        .list_favorites(&receiver, &GetPaginated::default())
        .await?;

    assert_eq!(page.messages[0].sender_nickname, "true_identity");

    Ok(())
}

#[tokio::test]
async fn test_list_favorites_guest_sender_fails() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    // A favorited guest message has no sender row to resolve.
    let id = seed_message(&message_repo, receiver, GUEST_SENDER_ID, folder, "guest", true).await;
    service.toggle_favorite(&receiver, &id).await?;

    let error = service
        .list_favorites(&receiver, &GetPaginated::default())
        .await
        .expect_err("list_favorites should have returned an error");

    assert_eq!(error.error_code(), "USER_NOT_FOUND");

    Ok(())
}

// == Read Tests ==

#[tokio::test]
async fn test_mark_read_success() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    let id = seed_message(&message_repo, receiver, sender, folder, "unread", false).await;

    service.mark_read(&receiver, &id).await?;

    let message = message_repo.find_by_id(&id).await?.expect("message missing");
    assert!(message.already_read, "Expected the message to be read");

    Ok(())
}

#[tokio::test]
async fn test_mark_read_scoped_to_owner() {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let other = seed_user(&user_repo, 3, "other");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let other_folder = seed_folder(&folder_repo, 11, other, FruitType::Default);

    let foreign =
        seed_message(&message_repo, other, sender, other_folder, "not yours", false).await;

    let error = service
        .mark_read(&receiver, &foreign)
        .await
        .expect_err("mark_read should have returned an error");

    assert_eq!(error.error_code(), "MESSAGE_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_messages_empty_batch_is_noop() -> Result<(), Box<dyn std::error::Error>> {
    let (user_repo, folder_repo, message_repo, service) = setup();
    let sender = seed_user(&user_repo, 1, "sender");
    let receiver = seed_user(&user_repo, 2, "receiver");
    let folder = seed_folder(&folder_repo, 10, receiver, FruitType::Default);

    let id = seed_message(&message_repo, receiver, sender, folder, "stays", false).await;

    service.delete_messages(&receiver, &[]).await?;

    assert!(message_repo.find_by_id(&id).await?.is_some());

    Ok(())
}
