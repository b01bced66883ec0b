mod likes_test;
